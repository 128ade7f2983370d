mod common;
mod fraud;
mod reporting;
