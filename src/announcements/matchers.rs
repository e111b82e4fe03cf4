//! Keyword tables for announcement classification.
//!
//! All matchers are ordered `(pattern, label)` tables evaluated in
//! declaration order with first-match-wins semantics. Order is part of the
//! contract: more specific patterns sit above the general ones they overlap
//! with, and the first listed keyword that matches is the one reported.

use super::types::RelevanceCategory;

/// Major corporate events
const HIGH_KEYWORDS: &[&str] = &[
    "TAKEOVER",
    "ACQUISITION",
    "MERGER",
    "DISPOSAL",
    "DIVIDEND",
    "CAPITAL RAISING",
    "PLACEMENT",
    "SPP",
    "RIGHTS ISSUE",
    "FINANCIAL REPORT",
    "HALF YEAR",
    "FULL YEAR",
    "ANNUAL REPORT",
    "QUARTERLY",
    "PRELIMINARY FINAL",
    "EARNINGS",
    "GUIDANCE",
    "FORECAST",
    "OUTLOOK",
    "ASSET SALE",
    "DIVESTMENT",
];

/// Governance and significant operational events
const MEDIUM_KEYWORDS: &[&str] = &[
    "DIRECTOR",
    "CHAIRMAN",
    "CEO",
    "CFO",
    "MANAGING DIRECTOR",
    "APPOINTMENT",
    "RESIGNATION",
    "RETIREMENT",
    "AGM",
    "EGM",
    "GENERAL MEETING",
    "CONTRACT",
    "AGREEMENT",
    "PARTNERSHIP",
    "JOINT VENTURE",
    "EXPLORATION",
    "DRILLING",
    "RESOURCE",
    "RESERVE",
    "REGULATORY",
    "APPROVAL",
    "LICENSE",
    "PERMIT",
];

/// Routine disclosures
const LOW_KEYWORDS: &[&str] = &[
    "PROGRESS REPORT",
    "UPDATE",
    "INVESTOR PRESENTATION",
    "DISCLOSURE",
    "CLEANSING",
    "STATEMENT",
    "APPENDIX",
    "SUBSTANTIAL HOLDER",
    "CHANGE OF ADDRESS",
    "COMPANY SECRETARY",
];

/// Administrative filings excluded from signal analysis, most specific
/// pattern first so overlapping prefixes resolve deterministically.
const ROUTINE_PATTERNS: &[(&str, &str)] = &[
    ("NOTICE OF ANNUAL GENERAL MEETING", "AGM Notice"),
    ("NOTICE OF GENERAL MEETING", "Meeting Notice"),
    ("RESULTS OF MEETING", "Meeting Results"),
    ("PROPOSED ISSUE OF SECURITIES", "Securities Issue"),
    ("APPLICATION FOR QUOTATION OF SECURITIES", "Quotation Application"),
    ("APPLICATION FOR QUOTATION", "Quotation Application"),
    ("NOTIFICATION OF CESSATION OF SECURITIES", "Securities Cessation"),
    ("NOTIFICATION OF CESSATION", "Securities Cessation"),
    ("NOTIFICATION REGARDING UNQUOTED SECURITIES", "Unquoted Securities"),
    ("NOTIFICATION REGARDING UNQUOTED", "Unquoted Securities"),
    ("CHANGE OF DIRECTOR'S INTEREST NOTICE", "Director Interest Change"),
    ("CHANGE OF DIRECTORS INTEREST", "Director Interest Change"),
    ("APPENDIX 3Y", "Director Interest (3Y)"),
    ("APPENDIX 3X", "Initial Director Interest (3X)"),
    ("APPENDIX 3B", "New Issue (3B)"),
    ("APPENDIX 3G", "Issue Notification (3G)"),
    ("CLEANSING NOTICE", "Cleansing Notice"),
    ("CLEANSING STATEMENT", "Cleansing Notice"),
];

const HALT_KEYWORDS: &[&str] = &[
    "TRADING HALT",
    "VOLUNTARY SUSPENSION",
    "SUSPENSION FROM QUOTATION",
    "SUSPENDED FROM TRADING",
];

const REINSTATEMENT_KEYWORDS: &[&str] = &[
    "REINSTATEMENT",
    "RESUMPTION OF TRADING",
    "TRADING RESUMES",
    "LIFTED SUSPENSION",
    "END OF SUSPENSION",
];

const DIVIDEND_KEYWORDS: &[&str] = &[
    "DIVIDEND",
    "DRP",
    "DISTRIBUTION",
    "EX-DATE",
    "EX DATE",
    "RECORD DATE",
    "PAYMENT DATE",
    "FRANKING",
    "UNFRANKED",
    "FRANKED",
];

/// Classify the relevance tier of an announcement from keywords in its
/// headline and type. Price-sensitive announcements are HIGH outright.
pub fn classify_relevance(
    headline: &str,
    ann_type: &str,
    price_sensitive: bool,
) -> (RelevanceCategory, String) {
    if price_sensitive {
        return (
            RelevanceCategory::High,
            "Price-sensitive announcement".to_string(),
        );
    }

    let type_upper = ann_type.to_uppercase();
    let headline_upper = headline.to_uppercase();

    for kw in HIGH_KEYWORDS {
        if type_upper.contains(kw) || headline_upper.contains(kw) {
            return (RelevanceCategory::High, format!("Contains '{kw}'"));
        }
    }

    for kw in MEDIUM_KEYWORDS {
        if type_upper.contains(kw) || headline_upper.contains(kw) {
            return (RelevanceCategory::Medium, format!("Contains '{kw}'"));
        }
    }

    for kw in LOW_KEYWORDS {
        if type_upper.contains(kw) || headline_upper.contains(kw) {
            return (
                RelevanceCategory::Low,
                format!("Routine disclosure: '{kw}'"),
            );
        }
    }

    (
        RelevanceCategory::Noise,
        "No material indicators found".to_string(),
    )
}

/// Whether the headline is a standard administrative filing; returns the
/// routine type label when it is.
pub fn is_routine_announcement(headline: &str) -> Option<&'static str> {
    let headline_upper = headline.to_uppercase();
    ROUTINE_PATTERNS
        .iter()
        .find(|(pattern, _)| headline_upper.contains(pattern))
        .map(|(_, label)| *label)
}

/// Detect trading halts and reinstatements. At most one of the returned
/// flags is true; halt keywords take priority.
pub fn detect_trading_halt(headline: &str) -> (bool, bool) {
    let headline_upper = headline.to_uppercase();

    for kw in HALT_KEYWORDS {
        if headline_upper.contains(kw) {
            return (true, false);
        }
    }

    for kw in REINSTATEMENT_KEYWORDS {
        if headline_upper.contains(kw) {
            return (false, true);
        }
    }

    (false, false)
}

/// Whether the announcement is dividend-related, from headline or type.
pub fn is_dividend_announcement(headline: &str, ann_type: &str) -> bool {
    let headline_upper = headline.to_uppercase();
    let type_upper = ann_type.to_uppercase();

    DIVIDEND_KEYWORDS
        .iter()
        .any(|kw| headline_upper.contains(kw) || type_upper.contains(kw))
}
