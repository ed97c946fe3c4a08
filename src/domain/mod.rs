mod benefit;
mod learner_email;

pub use benefit::{Benefit, BenefitError, BenefitType, RawBenefit};
pub use learner_email::LearnerEmail;
