use crate::domain::staff::models::StaffAccount;
use crate::domain::vacation::models::Vacation;

/// Date format used in mail bodies, e.g. 10.01.2024
const MAIL_DATE_FORMAT: &str = "%d.%m.%Y";

/// A rendered notification, ready for the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

impl MailMessage {
    /// Welcome mail sent after an account is registered.
    ///
    /// Deliberately omits the password: credentials are never echoed in
    /// plaintext after creation.
    pub fn staff_welcome(account: &StaffAccount) -> Self {
        Self {
            to: account.email.as_str().to_string(),
            subject: "Your staff account".to_string(),
            html_body: format!(
                "<div>\
                 <p><b>Dear {name}</b></p>\
                 <p>A {role} account has been created for <b>{email}</b>.</p>\
                 <p>Sign in with the password you were given to get started.</p>\
                 </div>",
                name = account.full_name(),
                role = account.role,
                email = account.email,
            ),
        }
    }

    /// Mail sent after an account's details are overwritten.
    pub fn credentials_updated(account: &StaffAccount) -> Self {
        Self {
            to: account.email.as_str().to_string(),
            subject: "Your account details were updated".to_string(),
            html_body: format!(
                "<div>\
                 <p><b>Dear {name}</b></p>\
                 <p>The details of your {role} account <b>{email}</b> were updated.</p>\
                 <p>If you did not expect this change, contact your administrator.</p>\
                 </div>",
                name = account.full_name(),
                role = account.role,
                email = account.email,
            ),
        }
    }

    /// Mail sent to the owner after a vacation is scheduled.
    pub fn vacation_scheduled(owner: &StaffAccount, vacation: &Vacation) -> Self {
        Self {
            to: owner.email.as_str().to_string(),
            subject: "Vacation scheduled".to_string(),
            html_body: format!(
                "<div>\
                 <p><b>Dear {name}</b></p>\
                 <p>A vacation has been scheduled for you from {start} to {end}.</p>\
                 <p>Sign in for the full details.</p>\
                 </div>",
                name = owner.full_name(),
                start = vacation.start_date.format(MAIL_DATE_FORMAT),
                end = vacation.end_date.format(MAIL_DATE_FORMAT),
            ),
        }
    }

    /// Mail sent to the owner after a vacation is changed.
    pub fn vacation_changed(owner: &StaffAccount, vacation: &Vacation) -> Self {
        Self {
            to: owner.email.as_str().to_string(),
            subject: "Vacation updated".to_string(),
            html_body: format!(
                "<div>\
                 <p><b>Dear {name}</b></p>\
                 <p>Your vacation was changed to run from {start} to {end}.</p>\
                 <p>Sign in for the full details.</p>\
                 </div>",
                name = owner.full_name(),
                start = vacation.start_date.format(MAIL_DATE_FORMAT),
                end = vacation.end_date.format(MAIL_DATE_FORMAT),
            ),
        }
    }
}
