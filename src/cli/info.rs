pub fn info(config: &crate::config::Config) {
    if config.contact.channels.is_empty() {
        tracing::warn!("No contact channels configured");
        return;
    }

    for channel in &config.contact.channels {
        println!("{}: {}", channel.title, channel.content);
    }
}
