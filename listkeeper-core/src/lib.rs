//! # ListKeeper Core
//!
//! This crate provides a small input validation framework for interactive
//! CLI applications.
//!
//! Every prompt is a blocking loop: the user is asked again, with an
//! explanation, until the answer is well formed. Callers never see invalid
//! input, only stream failures such as a closed stdin.
//!
//! ## Features
//! - Integer and floating point prompts, optionally bounded to `[min, max]`.
//! - Non-empty lines, yes/no confirmations and whole-line regex matches.
//! - Composable line filters via [`utils::Sanitize`].
//! - A boxed banner helper, [`utils::pretty_header`].
//!
//! ## Example
//! ```rust,no_run
//! use listkeeper_core::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let age = terminal.read_ranged_int("Enter your age", 0, 130).unwrap();
//! println!("You entered: {}", age);
//! ```

pub mod utils;
