/// Base URL of the Cloudflare v4 REST API.
pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Page-size hint sent with record listings. A single page is fetched; a
/// DDNS-managed zone stays far below this.
pub const RECORD_PAGE_SIZE: u32 = 100;
