//! App-level models. Data records live in `fadeline_core::models`.

mod route;

pub use route::AppRoute;
