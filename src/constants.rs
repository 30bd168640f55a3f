/// Number of attempts made to download the account instruments when the client is built
pub const INSTRUMENT_DOWNLOAD_ATTEMPTS: u32 = 3;
/// Default number of candles requested when no time range is given
pub const DEFAULT_CANDLE_COUNT: u32 = 10;
/// Default candle granularity (one hour)
pub const DEFAULT_GRANULARITY: &str = "H1";
/// Default price components requested for candles: mid, bid and ask
pub const DEFAULT_PRICE_COMPONENTS: &str = "MBA";
/// Format used for the `from`/`to` candle query parameters
pub const CANDLE_QUERY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
/// Format used for the time column of chart-oriented candle output
pub const WEB_CANDLE_TIME_FORMAT: &str = "%y-%m-%d %H:%M";
/// Default directory for files written by the client
pub const DEFAULT_DATA_PATH: &str = "./data";
/// Default file name of the persisted instrument list
pub const DEFAULT_INSTRUMENTS_FILE: &str = "instruments.json";
/// Default location of the credentials file
pub const DEFAULT_CREDENTIALS_FILE: &str = "./api/api_creds.json";
/// Default REST endpoint (practice environment)
pub const DEFAULT_REST_BASE_URL: &str = "https://api-fxpractice.oanda.com/v3";
/// Default timeout in seconds for REST requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "oanda-client/0.1.0";
