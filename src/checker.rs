//! Background face check.
//!
//! A single worker thread owns its own detector and receives frame copies on a
//! bounded channel. When a check is already pending, new frames are dropped
//! instead of queued, so the render loop never blocks on detection.

use crate::constants::CHECK_QUEUE_CAPACITY;
use crate::detection::FaceDetector;
use crate::matcher::{evaluate, MatchFlag};
use crate::{Error, Result};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{debug, error, info, warn};
use opencv::{core::Mat, prelude::*};
use std::thread::{self, JoinHandle};

const WORKER_NAME: &str = "face-check";

/// Handle to the background face check thread
pub struct FaceCheckWorker {
    sender: Option<Sender<Mat>>,
    handle: Option<JoinHandle<()>>,
    flag: MatchFlag,
}

impl FaceCheckWorker {
    /// Spawn the worker
    ///
    /// `reference_faces` is fixed for the worker's lifetime; with zero the flag
    /// is only ever set to false.
    pub fn spawn(detector: Box<dyn FaceDetector>, reference_faces: usize, flag: MatchFlag) -> Result<Self> {
        let (sender, receiver) = crossbeam_channel::bounded::<Mat>(CHECK_QUEUE_CAPACITY);

        let worker_flag = flag.clone();
        let handle = thread::Builder::new()
            .name(WORKER_NAME.to_string())
            .spawn(move || run_checks(detector, reference_faces, &worker_flag, &receiver))?;

        info!("Face check worker started ({} reference face(s))", reference_faces);

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
            flag,
        })
    }

    /// Queue a copy of `frame` for checking
    ///
    /// Returns `false` when a check is already pending and the frame was dropped.
    ///
    /// # Errors
    ///
    /// Returns `Worker` if the worker has stopped, or an `OpenCV` error if the
    /// frame cannot be copied.
    pub fn submit(&self, frame: &Mat) -> Result<bool> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| Error::Worker("face check worker is shut down".to_string()))?;

        match sender.try_send(frame.try_clone()?) {
            Ok(()) => Ok(true),
            Err(TrySendError::Full(_)) => {
                debug!("Face check still pending, frame skipped");
                Ok(false)
            }
            Err(TrySendError::Disconnected(_)) => Err(Error::Worker("face check worker stopped".to_string())),
        }
    }

    /// Flag written by the worker
    #[must_use]
    pub fn flag(&self) -> &MatchFlag {
        &self.flag
    }

    /// Stop accepting frames, let the worker finish pending checks and join it
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        // Closing the channel ends the worker's receive loop
        drop(self.sender.take());

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Face check worker panicked");
            } else {
                debug!("Face check worker stopped");
            }
        }
    }
}

impl Drop for FaceCheckWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_checks(mut detector: Box<dyn FaceDetector>, reference_faces: usize, flag: &MatchFlag, frames: &Receiver<Mat>) {
    for frame in frames {
        let matched = match detector.detect_faces(&frame) {
            Ok(faces) => evaluate(faces.len(), reference_faces),
            Err(e) => {
                error!("Error in face detection: {}", e);
                false
            }
        };

        if flag.set(matched) != matched {
            debug!("Background check changed match flag to {}", matched);
        }
    }
}
