//! Blend a watermark image onto a base image.
//!
//! The watermark is mixed into the base per channel with an integer percentage
//! weight. Watermark pixels can be masked out either by their alpha channel or
//! by a transparency key color, and the watermark is placed once at an offset
//! or tiled across the whole image.
//!
//! # Quick Start
//!
//! ```no_run
//! use watermark_blend::blending::{blend, BlendConfig, EdgeMode, Masking, Placement, Position, Weight};
//!
//! let base = image::open("photo.jpg").unwrap().to_rgb8();
//! let mark = image::open("logo.png").unwrap().to_rgba8();
//! let config = BlendConfig {
//!     weight: Weight::new(40).unwrap(),
//!     masking: Masking::Alpha,
//!     placement: Placement::Single(Position { x: 16, y: 16 }),
//!     edge: EdgeMode::Exclusive,
//! };
//! let out = blend(&base, &mark, &config);
//! out.save("marked.png").unwrap();
//! ```
//!
//! # Interactive flow
//!
//! [`prompt::gather_job`] asks for every input in turn, validates each answer
//! and returns a [`BlendJob`] ready to [`run`](BlendJob::run).
//!
//! ```no_run
//! use std::io;
//! use watermark_blend::prompt::{gather_job, JobOptions, Prompter};
//!
//! let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
//! let job = gather_job(&mut prompter, &JobOptions::default()).unwrap();
//! let path = job.run().unwrap();
//! println!("The watermarked image {} has been created.", path.display());
//! ```

#![deny(missing_docs)]

pub mod blending;
mod engine;
pub mod error;
pub mod prompt;
pub mod sink;
pub mod source;
pub mod validate;

pub use engine::BlendJob;
pub use error::{Error, Result};
