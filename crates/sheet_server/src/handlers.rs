//! HTTP handlers for the convert API.

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;
use sheet_engine::{registry, ConvertRequest, SheetService};

/// Generic client-facing failure message for the conversion endpoint. The
/// underlying error is logged but deliberately not leaked to export
/// consumers; the preview endpoint does surface it.
const CONVERT_FAILURE_MESSAGE: &str =
    "Failed to convert sheet. The source structure might have changed.";

pub struct AppState {
    pub service: SheetService,
}

#[derive(Serialize)]
struct SheetListing {
    id: &'static str,
    label: &'static str,
    author: &'static str,
}

#[get("/api/convert")]
async fn list_sheets() -> impl Responder {
    let list: Vec<SheetListing> = registry::all()
        .iter()
        .map(|source| SheetListing {
            id: source.id,
            label: source.label,
            author: source.author,
        })
        .collect();
    HttpResponse::Ok().json(list)
}

#[get("/api/convert/{sheet_id}")]
async fn preview_sheet(path: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    let sheet_id = path.into_inner();
    match state.service.fetch_and_normalize(&sheet_id).await {
        Ok(sheet) => HttpResponse::Ok().json(sheet),
        Err(err) => {
            log::error!("preview error for {sheet_id}: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": err.to_string() }))
        }
    }
}

#[post("/api/convert")]
async fn convert_sheet(
    body: web::Json<ConvertRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let request = body.into_inner();
    log::info!(
        "conversion request for {} ({} extra columns)",
        request.sheet_id,
        request.extra_columns.len()
    );

    match state.service.convert(&request).await {
        Ok(file) => HttpResponse::Ok()
            .content_type(file.media_type)
            .insert_header((
                "Content-Disposition",
                attachment_header(&request.sheet_id, file.extension),
            ))
            .body(file.bytes),
        Err(err) => {
            log::error!("conversion error for {}: {err}", request.sheet_id);
            HttpResponse::InternalServerError().json(json!({ "error": CONVERT_FAILURE_MESSAGE }))
        }
    }
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "OK" }))
}

fn attachment_header(sheet_id: &str, extension: &str) -> String {
    format!("attachment; filename=\"{sheet_id}-export.{extension}\"")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_sheets)
        .service(preview_sheet)
        .service(convert_sheet)
        .service(health);
}
