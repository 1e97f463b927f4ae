use actix_web::{
    error, get, http::header::ContentType, post, web, HttpRequest, HttpResponse, Responder,
};
use healthcalc_model::{
    validate::{validate_bmi, validate_bmr},
    BmiResult, BmrResult,
};
use log::{debug, warn};
use serde_json::Value;

use crate::error::ApiError;

const INDEX_HTML: &str = include_str!("../static/index.html");

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}

/// Height in meters, weight in kilograms.
#[post("/bmi")]
async fn bmi(body: web::Json<Value>) -> Result<web::Json<BmiResult>, ApiError> {
    let request = validate_bmi(&body).inspect_err(|e| warn!("Rejected BMI input: {}", e))?;
    let result = request.compute()?;
    debug!("{:?} -> {:?}", request, result);
    Ok(web::Json(result))
}

/// Height in centimeters, weight in kilograms, age in years.
#[post("/bmr")]
async fn bmr(body: web::Json<Value>) -> Result<web::Json<BmrResult>, ApiError> {
    let request = validate_bmr(&body).inspect_err(|e| warn!("Rejected BMR input: {}", e))?;
    let result = request.compute()?;
    debug!("{:?} -> {:?}", request, result);
    Ok(web::Json(result))
}

fn payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Unreadable JSON body for {}: {}", req.path(), err);
    ApiError::Payload(err.to_string()).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(payload_error))
        .service(index)
        .service(bmi)
        .service(bmr);
}
