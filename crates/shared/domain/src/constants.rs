//! Domain-level constants.
//!
//! These constants define column limits, defaults and the reference data
//! the store is provisioned with.

// =============================================================================
// Column Limits
// =============================================================================

/// Maximum length of a bank display name
pub const MAX_BANK_NAME_LENGTH: usize = 100;

/// Maximum length of an exchange stock code
pub const MAX_STOCK_CODE_LENGTH: usize = 20;

/// Maximum length of an indicator code
pub const MAX_INDICATOR_CODE_LENGTH: usize = 50;

/// Maximum length of an indicator display name
pub const MAX_INDICATOR_NAME_LENGTH: usize = 100;

/// Maximum length of a report source URL
pub const MAX_SOURCE_URL_LENGTH: usize = 512;

/// Maximum length of a currency code column
pub const MAX_CURRENCY_LENGTH: usize = 10;

/// Total digits of a reported value
pub const VALUE_PRECISION: u32 = 20;

/// Fractional digits of a reported value
pub const VALUE_SCALE: u32 = 4;

// =============================================================================
// Reports
// =============================================================================

/// Currency assigned to reports that do not name one
pub const DEFAULT_CURRENCY: &str = "CNY";

/// Earliest fiscal year accepted for a report
pub const MIN_REPORT_YEAR: i32 = 1990;

/// Latest fiscal year accepted for a report
pub const MAX_REPORT_YEAR: i32 = 2100;

/// Period type code: first quarter
pub const PERIOD_Q1: &str = "Q1";

/// Period type code: half year
pub const PERIOD_H1: &str = "H1";

/// Period type code: first three quarters
pub const PERIOD_Q3: &str = "Q3";

/// Period type code: full year
pub const PERIOD_FY: &str = "FY";

/// All valid period type codes
pub const VALID_PERIOD_TYPES: &[&str] = &[PERIOD_Q1, PERIOD_H1, PERIOD_Q3, PERIOD_FY];

// =============================================================================
// Exchanges
// =============================================================================

/// Shanghai Stock Exchange suffix
pub const EXCHANGE_SHANGHAI: &str = "SH";

/// Shenzhen Stock Exchange suffix
pub const EXCHANGE_SHENZHEN: &str = "SZ";

/// Beijing Stock Exchange suffix
pub const EXCHANGE_BEIJING: &str = "BJ";

// =============================================================================
// Reference Data
// =============================================================================

/// Major A-share listed banks as `(bank_name, stock_code)`.
pub const LISTED_BANKS: &[(&str, &str)] = &[
    // State-owned large banks
    ("工商银行", "601398.SH"),
    ("建设银行", "601939.SH"),
    ("农业银行", "601288.SH"),
    ("中国银行", "601988.SH"),
    ("交通银行", "601328.SH"),
    ("邮储银行", "601658.SH"),
    // Joint-stock banks
    ("招商银行", "600036.SH"),
    ("兴业银行", "601166.SH"),
    ("平安银行", "000001.SZ"),
    ("浦发银行", "600000.SH"),
    ("中信银行", "601998.SH"),
    ("民生银行", "600016.SH"),
    ("光大银行", "601818.SH"),
    ("华夏银行", "600015.SH"),
    // City commercial banks
    ("宁波银行", "002142.SZ"),
    ("南京银行", "601009.SH"),
    ("江苏银行", "600919.SH"),
    ("上海银行", "601229.SH"),
    ("北京银行", "601169.SH"),
    ("杭州银行", "600926.SH"),
    ("成都银行", "601838.SH"),
    ("厦门银行", "601187.SH"),
    ("苏农银行", "603323.SH"),
    ("瑞丰银行", "601528.SH"),
    ("齐鲁银行", "601665.SH"),
    // Rural commercial banks
    ("常熟银行", "601128.SH"),
    ("张家港行", "002839.SZ"),
    ("无锡银行", "600908.SH"),
    ("江阴银行", "002807.SZ"),
    // Other listed banks
    ("青岛银行", "002948.SZ"),
    ("西安银行", "600928.SH"),
    ("长沙银行", "601577.SH"),
    ("郑州银行", "002936.SZ"),
    ("紫金银行", "601860.SH"),
];
