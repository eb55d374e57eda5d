use actix_web::{HttpResponse, web};

use super::errors::NotificationError;
use crate::{
    domain::{
        AdminNotificationRequest, BrochureRequest, ContactConfirmationRequest,
        DiscoveryCallRequest, WorkshopBookingRequest,
    },
    mailer::Mailer,
};

pub async fn send_contact_confirmation(
    body: web::Json<ContactConfirmationRequest>,
    mailer: web::Data<Mailer>,
) -> Result<HttpResponse, NotificationError> {
    let result = mailer.send_contact_confirmation(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn send_workshop_confirmation(
    body: web::Json<WorkshopBookingRequest>,
    mailer: web::Data<Mailer>,
) -> Result<HttpResponse, NotificationError> {
    let result = mailer
        .send_workshop_booking_confirmation(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn send_brochure_confirmation(
    body: web::Json<BrochureRequest>,
    mailer: web::Data<Mailer>,
) -> Result<HttpResponse, NotificationError> {
    let result = mailer.send_brochure_confirmation(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn send_discovery_call_confirmation(
    body: web::Json<DiscoveryCallRequest>,
    mailer: web::Data<Mailer>,
) -> Result<HttpResponse, NotificationError> {
    let result = mailer
        .send_discovery_call_confirmation(body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn send_admin_notification(
    body: web::Json<AdminNotificationRequest>,
    mailer: web::Data<Mailer>,
) -> Result<HttpResponse, NotificationError> {
    let result = mailer.send_admin_notification(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}
