// =============================================================================
// SUBMISSION MESSAGES
// =============================================================================

pub const MSG_INVALID_NAME: &str = "Please input a valid name.";
pub const MSG_MISSING_DATE: &str = "Please provide a date.";
pub const MSG_MISSING_TIME: &str = "Please input a start and end time.";
pub const MSG_SUBMITTED: &str = "DPM Submitted!";
pub const MSG_LOAD_FAILED: &str =
    "There was an error loading the resources for this page, please try again";
pub const MSG_GENERIC_ERROR: &str = "There was an error, please try again";

// =============================================================================
// APPROVAL MESSAGES
// =============================================================================

pub const MSG_APPROVED: &str = "DPM Approved";
pub const MSG_APPROVE_FAILED: &str = "There was an error approving this DPM.";
pub const MSG_DENIED: &str = "DPM Denied";
pub const MSG_DENY_FAILED: &str = "There was an error denying this DPM.";

// =============================================================================
// WIRE
// =============================================================================

/// Header carrying the anti-forgery token on state-changing requests
pub const CSRF_HEADER: &str = "X-CSRF-Token";

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Point value attached to every new submission; the server assigns the real one
pub const NEW_REPORT_POINTS: &str = "0";
