// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - request building, transport and the client façade.

pub mod dexcom;
pub mod endpoint;
pub mod requests;
pub mod response;
pub mod transport;

pub use dexcom::DexcomClient;
pub use endpoint::Environment;
pub use requests::TokenGrant;
pub use response::interpret;
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport, TransportError};
