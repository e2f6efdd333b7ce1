use portfolio_contact::{SubmissionController, SubmitOutcome};
use portfolio_notification::{EmailJsSender, SmtpSender};
use portfolio_shared::EmailSender;

use crate::{
    ConsoleNotifier,
    cli::FormArgs,
    config::{Config, Transport},
};

pub fn create_sender(config: &Config) -> anyhow::Result<Box<dyn EmailSender>> {
    let sender: Box<dyn EmailSender> = match config.email.transport {
        Transport::EmailJs => {
            let Some(emailjs) = &config.email.emailjs else {
                anyhow::bail!("email.emailjs is not configured");
            };
            Box::new(EmailJsSender::new(emailjs.clone())?)
        }
        Transport::Smtp => {
            let Some(smtp) = &config.email.smtp else {
                anyhow::bail!("email.smtp is not configured");
            };
            Box::new(SmtpSender::new(smtp)?)
        }
    };

    Ok(sender)
}

pub async fn submit(config: &Config, form: FormArgs) -> anyhow::Result<SubmitOutcome> {
    tracing::info!(transport = %config.email.transport, "Submitting contact form");

    let controller =
        SubmissionController::with_form(form.into_form(), create_sender(config)?, ConsoleNotifier);

    let outcome = controller.submit().await;

    if outcome == SubmitOutcome::Rejected {
        for (field, error) in controller.errors().await.iter() {
            if let Some(error) = error {
                eprintln!("  {field}: {error}");
            }
        }
    }

    Ok(outcome)
}
