//! Report format implementations.
//!
//! This module contains the schema-specific implementations of the
//! [`ReportFormat`](crate::normalize::ReportFormat) trait:
//! - `defectdojo` - DefectDojo JSON exports (`findings` array)
//! - `sonarqube` - SonarQube issue exports (`issues` array)

pub mod defectdojo;
pub mod sonarqube;

pub use defectdojo::DefectDojoFormat;
pub use sonarqube::SonarQubeFormat;
