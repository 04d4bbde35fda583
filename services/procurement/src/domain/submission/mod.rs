//! 采购申请 (pengajuan) 领域模块

#![allow(clippy::module_inception)]

pub mod repository;
pub mod status;
pub mod submission;

pub use repository::SubmissionRepository;
pub use status::SubmissionStatus;
pub use submission::{Category, NewSubmission, Submission, SubmissionReview, UNTITLED};
