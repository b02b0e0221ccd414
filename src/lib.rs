#![allow(clippy::doc_markdown)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod bidi;
pub mod config;
pub mod confusables;
pub mod error;
pub mod files;
pub mod linemap;
pub mod lint;
pub mod nits;
pub mod precis;
pub mod profile;
pub mod tokenizer;

#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
#[cfg(feature = "cli")]
pub mod cli;
