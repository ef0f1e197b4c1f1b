use gloo_net::http::{Request, Response};
use gradecast_core::{
    decode_prediction, ClassList, DatasetStats, FormSubmission, GpaBands, GradecastError,
    PredictionOutcome, RangeSummary, Result, SampleValues,
};
use serde::de::DeserializeOwned;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

fn network(e: gloo_net::Error) -> GradecastError {
    GradecastError::Network(e.to_string())
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.ok() {
        return Err(GradecastError::Server {
            status: resp.status(),
            message: format!("Server responded with status {}", resp.status()),
            details: Vec::new(),
        });
    }
    let body = resp.text().await.map_err(network)?;
    Ok(serde_json::from_str(&body)?)
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let resp = Request::get(path).send().await.map_err(network)?;
    read_json(resp).await
}

pub async fn fetch_ranges() -> Result<RangeSummary> {
    get_json("/ranges").await
}

pub async fn fetch_sample() -> Result<SampleValues> {
    get_json("/sample").await
}

pub async fn fetch_classes() -> Result<ClassList> {
    get_json("/classes").await
}

pub async fn fetch_gpa_bands() -> Result<GpaBands> {
    get_json("/gpa_info").await
}

pub async fn fetch_dataset_stats() -> Result<DatasetStats> {
    get_json("/dataset_stats").await
}

/// Post the form body. Non-2xx bodies carry the server's error message.
pub async fn predict(submission: FormSubmission) -> PredictionOutcome {
    let resp = Request::post("/predict")
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(submission.encode())
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    let status = resp.status();
    let body = resp.text().await.map_err(network)?;
    decode_prediction(status, &body)
}
