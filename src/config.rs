#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub jwt_secret: String,
    pub jwt_maxage: i64,
    pub port: u16,
    // WhatsApp provider (Twilio); all three must be set for live delivery
    pub twilio_account_sid: Option<String>,
    pub twilio_auth_token: Option<String>,
    pub twilio_whatsapp_from: Option<String>,
    // Email service configurations
    pub smtp_host: String,
    pub smtp_username: String,
    pub smtp_password: String,
    pub smtp_from: String,
    // Seed credentials for the admin panel
    pub admin_phone: String,
    pub admin_password: String,
}

impl Config {
    pub fn init() -> Config {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let jwt_secret = std::env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY must be set");
        let jwt_maxage = std::env::var("JWT_MAXAGE").unwrap_or_else(|_| "86400".to_string());
        let app_url = std::env::var("APP_URL").expect("APP_URL must be set");

        let twilio_account_sid = std::env::var("TWILIO_ACCOUNT_SID").ok();
        let twilio_auth_token = std::env::var("TWILIO_AUTH_TOKEN").ok();
        let twilio_whatsapp_from = std::env::var("TWILIO_WHATSAPP_FROM").ok();

        let smtp_host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_username = std::env::var("SMTP_USERNAME").unwrap_or_else(|_| "".to_string());
        let smtp_password = std::env::var("SMTP_PASSWORD").unwrap_or_else(|_| "".to_string());
        let smtp_from = std::env::var("SMTP_FROM")
            .unwrap_or_else(|_| "Stafflink <noreply@stafflink.in>".to_string());

        let admin_phone = std::env::var("ADMIN_PHONE").expect("ADMIN_PHONE must be set");
        let admin_password = std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");

        Config {
            database_url,
            app_url,
            jwt_secret,
            jwt_maxage: jwt_maxage.parse::<i64>().unwrap(),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8000),
            twilio_account_sid,
            twilio_auth_token,
            twilio_whatsapp_from,
            smtp_host,
            smtp_username,
            smtp_password,
            smtp_from,
            admin_phone,
            admin_password,
        }
    }
}
