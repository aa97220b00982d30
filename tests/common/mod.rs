//! Test helpers for HTTP-level tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum_test::{
    multipart::{MultipartForm, Part},
    TestServer,
};
use file_depot::{
    adapters::{router::create_router, state::AppState},
    domain::config::{AppConfig, ResponseMode},
    services::create_storage_service,
};
use tempfile::TempDir;

/// A running test server together with its private upload directory.
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: PathBuf,
    _temp_dir: TempDir,
}

impl TestApp {
    /// Names of the files currently in the upload directory, sorted.
    pub fn stored_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.upload_dir)
            .expect("upload dir should exist")
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        names
    }

    pub fn stored_path(&self, name: &str) -> PathBuf {
        self.upload_dir.join(name)
    }
}

pub async fn spawn_app(mode: ResponseMode) -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let upload_dir = temp_dir.path().join("uploads");

    let mut config = AppConfig::for_directory(&upload_dir);
    config.server.response_mode = mode;

    let storage = create_storage_service(&config.server)
        .await
        .expect("Failed to prepare upload directory");
    let router = create_router(AppState::new(config, storage));
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        upload_dir,
        _temp_dir: temp_dir,
    }
}

pub fn file_part(content: Vec<u8>, filename: &str, mime_type: &str) -> Part {
    Part::bytes(content).file_name(filename).mime_type(mime_type)
}

pub fn single_file_form(content: Vec<u8>, filename: &str, mime_type: &str) -> MultipartForm {
    MultipartForm::new().add_part("file", file_part(content, filename, mime_type))
}

/// Storage names listed on an upload summary page.
pub fn summary_names(html: &str) -> Vec<String> {
    html.lines()
        .filter_map(|line| line.trim().strip_prefix("<p>Filename: "))
        .map(|rest| rest.trim_end_matches("</p>").to_string())
        .collect()
}

pub fn read(path: &Path) -> Vec<u8> {
    std::fs::read(path).expect("stored file should be readable")
}
