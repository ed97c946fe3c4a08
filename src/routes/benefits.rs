use crate::domain::{Benefit, RawBenefit};
use crate::offer::format_benefit_value;
use crate::utils::e400;
use actix_web::{web, HttpResponse};

#[derive(serde::Serialize)]
struct FormattedBenefit {
    formatted: String,
}

#[tracing::instrument(
    name = "Format a benefit value",
    skip(body),
    fields(
        benefit_type = ?body.kind,
        benefit_proxy_class = ?body.proxy_class,
    )
)]
pub async fn format_benefit(body: web::Json<RawBenefit>) -> Result<HttpResponse, actix_web::Error> {
    let benefit = Benefit::parse(body.into_inner()).map_err(e400)?;
    Ok(HttpResponse::Ok().json(FormattedBenefit {
        formatted: format_benefit_value(&benefit),
    }))
}
