/// Which half of the OTP flow the form is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginStep {
    #[default]
    Email,
    Otp,
}

pub fn validate_email(email: &str) -> Result<(), String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err("Enter your email address".into());
    }
    if !trimmed.contains('@') || trimmed.starts_with('@') || trimmed.ends_with('@') {
        return Err("Enter a valid email address".into());
    }
    Ok(())
}

pub fn validate_otp(otp: &str) -> Result<(), String> {
    let trimmed = otp.trim();
    if trimmed.is_empty() {
        return Err("Enter the code from your email".into());
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err("The code is digits only".into());
    }
    Ok(())
}
