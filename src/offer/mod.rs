mod assignment_email;
mod formatting;

pub use assignment_email::{
    send_assigned_offer_email, OfferAssignmentEmail, OFFER_ASSIGNMENT_EMAIL_SUBJECT,
};
pub use formatting::{add_currency, format_benefit_value, remove_exponent_and_trailing_zeros};
