//! HTTP file depot: upload files to a local directory, list them with
//! previews, download and delete them.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod services;
