//! Networking modules for the aggregation backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns every HTTP call the client makes: login via the SSR host's
//! session endpoint, everything else straight to the backend `/v1/*` routes
//! with a bearer header read from the cookie session store.

pub mod api;
