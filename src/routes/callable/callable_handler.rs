use actix_web::{HttpResponse, web};

use super::{
    errors::CallableError,
    types::{CallableRequest, CallableResponse},
};
use crate::{domain::MessageKind, mailer::Mailer};

#[tracing::instrument(
    name = "Callable function invoked",
    skip_all,
    fields(function = %name)
)]
pub async fn call_function(
    name: web::Path<String>,
    body: web::Json<CallableRequest>,
    mailer: web::Data<Mailer>,
) -> Result<HttpResponse, CallableError> {
    let name = name.into_inner();
    let kind = MessageKind::from_callable_name(&name).ok_or(CallableError::NotFound(name))?;

    // A null or absent `data` is validated like an empty payload.
    let payload = match body.into_inner().data {
        Some(serde_json::Value::Null) | None => serde_json::Value::Object(Default::default()),
        Some(data) => data,
    };

    let result = mailer.dispatch(kind, payload).await?;
    Ok(HttpResponse::Ok().json(CallableResponse { result }))
}
