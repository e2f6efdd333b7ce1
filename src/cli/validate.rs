use crate::cli::FormArgs;

/// Prints every field's error message as JSON and returns whether the form is valid.
pub fn validate(form: FormArgs) -> anyhow::Result<bool> {
    let mut form = form.into_form();
    let valid = form.validate_all();

    println!("{}", serde_json::to_string_pretty(&form.errors().messages())?);

    if !valid {
        tracing::info!("Contact form is invalid");
    }

    Ok(valid)
}
