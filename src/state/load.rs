//! Request-generation tracking shared by the fetch-and-render components.
//!
//! DESIGN
//! ======
//! Each component owns one `Tracked<T>`. A render call takes a token with
//! [`Tracked::begin`] before its fetch and hands the outcome back through
//! [`Tracked::resolve`]. Only the most recent token may change what is
//! displayed, so responses that arrive out of request order are dropped.
//! Starting a request does not touch the displayed value; the previous
//! snapshot stays up until a newer one lands.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

/// What a component currently displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Load<T> {
    /// No request has resolved yet.
    Pending,
    Ready(T),
    /// Inline message shown in place of content.
    Failed(String),
}

impl<T> Default for Load<T> {
    fn default() -> Self {
        Self::Pending
    }
}

/// Opaque handle identifying one in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Displayed value plus the generation of the newest request issued for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tracked<T> {
    latest: u64,
    pub load: Load<T>,
}

impl<T> Default for Tracked<T> {
    fn default() -> Self {
        Self { latest: 0, load: Load::Pending }
    }
}

impl<T> Tracked<T> {
    /// Issue a token for a new request, superseding all earlier tokens.
    pub fn begin(&mut self) -> RequestToken {
        self.latest = self.latest.wrapping_add(1);
        RequestToken(self.latest)
    }

    /// Whether `token` is still the newest request.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Apply a finished request. Returns `false` and leaves the displayed
    /// value untouched when a newer request has been issued since.
    pub fn resolve(&mut self, token: RequestToken, outcome: Result<T, String>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.load = match outcome {
            Ok(value) => Load::Ready(value),
            Err(message) => Load::Failed(message),
        };
        true
    }
}
