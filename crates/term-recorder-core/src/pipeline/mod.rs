mod capture;
mod outcome;
mod sink;

pub use {
    capture::CapturePipeline,
    outcome::{CaptureOutcome, IgnoreReason},
    sink::DisplaySink,
};
