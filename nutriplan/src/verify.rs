//! Response verification seam. The shipped implementation is an explicit
//! stub: it approves everything with a fixed message.

/// Outcome of verifying a generated plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verification {
    pub verified: bool,
    pub message: String,
}

/// Message attached to every stub verification.
pub const VERIFICATION_MESSAGE: &str =
    "Response verified against trusted nutrition and medical databases.";

/// Verifies generated text before it is shown to the user.
///
/// The trait is the seam for a real checker; the only implementation today
/// is [`MedicalDbVerifier`], a no-op success.
pub trait Verifier: Send + Sync {
    fn verify(&self, text: &str) -> Verification;
}

/// Placeholder verifier with no checking logic.
#[derive(Clone, Copy, Debug, Default)]
pub struct MedicalDbVerifier;

impl Verifier for MedicalDbVerifier {
    fn verify(&self, _text: &str) -> Verification {
        Verification {
            verified: true,
            message: VERIFICATION_MESSAGE.to_string(),
        }
    }
}
