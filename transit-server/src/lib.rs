//! Transit route planner server.
//!
//! A web application that answers: "how do I get from station A
//! to station B" over a fixed network of lines and transfers.

pub mod dataset;
pub mod domain;
pub mod routing;
pub mod web;
