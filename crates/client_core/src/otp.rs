//! Simulated OTP login. The mock backend always accepts after a fixed delay;
//! only local format checks can fail.

use std::time::Duration;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;
use tokio::time::{sleep, Instant};
use tracing::info;

use crate::phone;

pub const OTP_DIGITS: usize = 6;
pub const RESEND_COOLDOWN: Duration = Duration::from_secs(30);
pub const DEFAULT_NETWORK_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtpError {
    #[error("phone number must be 10 digits starting with 6-9")]
    InvalidPhone,
    #[error("no code has been requested yet")]
    CodeNotRequested,
    #[error("code must be {OTP_DIGITS} digits")]
    InvalidCode,
    #[error("resend available in {remaining_secs}s")]
    ResendCooldown { remaining_secs: u64 },
    #[error("already verified")]
    AlreadyVerified,
}

impl From<OtpError> for AppError {
    fn from(value: OtpError) -> Self {
        let code = match value {
            OtpError::InvalidPhone | OtpError::InvalidCode => ErrorCode::Validation,
            OtpError::CodeNotRequested
            | OtpError::ResendCooldown { .. }
            | OtpError::AlreadyVerified => ErrorCode::Conflict,
        };
        AppError::new(code, value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpStage {
    EnterPhone,
    Sending,
    CodeSent,
    Verifying,
    Verified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedLogin {
    pub phone: String,
}

pub struct OtpFlow {
    delay: Duration,
    stage: OtpStage,
    phone: Option<String>,
    sent_at: Option<Instant>,
}

impl OtpFlow {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            stage: OtpStage::EnterPhone,
            phone: None,
            sent_at: None,
        }
    }

    pub fn stage(&self) -> OtpStage {
        self.stage
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.stage, OtpStage::Sending | OtpStage::Verifying)
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the normalised number the code was sent to.
    pub async fn send_code(&mut self, raw_phone: &str) -> Result<String, OtpError> {
        if self.stage == OtpStage::Verified {
            return Err(OtpError::AlreadyVerified);
        }
        let number = phone::normalize(raw_phone);
        if !phone::is_valid(&number) {
            return Err(OtpError::InvalidPhone);
        }

        let busy = BusyStage::enter(&mut self.stage, OtpStage::Sending);
        sleep(self.delay).await;
        busy.finish(OtpStage::CodeSent);
        self.phone = Some(number.clone());
        self.sent_at = Some(Instant::now());
        info!(phone = %number, "otp sent");
        Ok(number)
    }

    pub fn resend_available_in(&self, now: Instant) -> Duration {
        match self.sent_at {
            Some(sent_at) => RESEND_COOLDOWN.saturating_sub(now.saturating_duration_since(sent_at)),
            None => Duration::ZERO,
        }
    }

    pub async fn resend(&mut self) -> Result<String, OtpError> {
        let Some(number) = self.phone.clone() else {
            return Err(OtpError::CodeNotRequested);
        };
        let remaining = self.resend_available_in(Instant::now());
        if !remaining.is_zero() {
            return Err(OtpError::ResendCooldown {
                remaining_secs: remaining.as_secs_f64().ceil() as u64,
            });
        }
        self.send_code(&number).await
    }

    pub async fn verify(&mut self, code: &str) -> Result<VerifiedLogin, OtpError> {
        if self.stage == OtpStage::Verified {
            return Err(OtpError::AlreadyVerified);
        }
        let Some(number) = self.phone.clone() else {
            return Err(OtpError::CodeNotRequested);
        };
        let code = code.trim();
        if code.len() != OTP_DIGITS || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OtpError::InvalidCode);
        }

        let busy = BusyStage::enter(&mut self.stage, OtpStage::Verifying);
        sleep(self.delay).await;
        busy.finish(OtpStage::Verified);
        info!(phone = %number, "otp verified");
        Ok(VerifiedLogin { phone: number })
    }
}

/// Holds a loading stage for the duration of a simulated request. Dropping it
/// unfinished, as happens when the request future is dropped mid-delay,
/// restores the stage that was current before the request.
struct BusyStage<'a> {
    stage: &'a mut OtpStage,
    previous: OtpStage,
    finished: bool,
}

impl<'a> BusyStage<'a> {
    fn enter(stage: &'a mut OtpStage, busy: OtpStage) -> Self {
        let previous = std::mem::replace(stage, busy);
        Self {
            stage,
            previous,
            finished: false,
        }
    }

    fn finish(mut self, next: OtpStage) {
        *self.stage = next;
        self.finished = true;
    }
}

impl Drop for BusyStage<'_> {
    fn drop(&mut self) {
        if !self.finished {
            *self.stage = self.previous;
        }
    }
}

impl Default for OtpFlow {
    fn default() -> Self {
        Self::new(DEFAULT_NETWORK_DELAY)
    }
}

#[cfg(test)]
#[path = "tests/otp_tests.rs"]
mod tests;
