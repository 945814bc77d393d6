//! Integration tests driving the full HTTP stack.


mod cors_test;
mod health_test;
mod stats_test;
mod track_share_test;
