mod benefits;
mod health_check;
mod offer_assignments;
