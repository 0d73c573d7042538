// mail/mails.rs
use num_traits::ToPrimitive;

use super::sendmail::send_email;
use crate::{
    config::Config,
    models::{bookingmodel::BusinessBooking, usermodel::BusinessUser},
};

/// Fixed template for the requirement-submitted email. Placeholders are
/// replaced with company, service and payment-calculation details.
const REQUIREMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <body style="font-family: Arial, sans-serif; color: #222; max-width: 600px; margin: 0 auto;">
    <h2 style="color: #1a56db;">New Staffing Requirement Received</h2>
    <p>Hi {{contact_name}},</p>
    <p>We have received the staffing requirement from <strong>{{company_name}}</strong> and are reaching out to matching workers now.</p>
    <table style="border-collapse: collapse; width: 100%;">
      <tr><td style="padding: 6px; border: 1px solid #ddd;">Service</td><td style="padding: 6px; border: 1px solid #ddd;">{{service_type}}</td></tr>
      <tr><td style="padding: 6px; border: 1px solid #ddd;">Workers needed</td><td style="padding: 6px; border: 1px solid #ddd;">{{workers_needed}}</td></tr>
      <tr><td style="padding: 6px; border: 1px solid #ddd;">Duration</td><td style="padding: 6px; border: 1px solid #ddd;">{{duration}}</td></tr>
      <tr><td style="padding: 6px; border: 1px solid #ddd;">Location</td><td style="padding: 6px; border: 1px solid #ddd;">{{location}}</td></tr>
      <tr><td style="padding: 6px; border: 1px solid #ddd;">Number of days</td><td style="padding: 6px; border: 1px solid #ddd;">{{number_of_days}}</td></tr>
      <tr><td style="padding: 6px; border: 1px solid #ddd;">Rate per worker per day</td><td style="padding: 6px; border: 1px solid #ddd;">{{rate_per_day}}</td></tr>
      <tr><td style="padding: 6px; border: 1px solid #ddd;">Estimated total</td><td style="padding: 6px; border: 1px solid #ddd;">{{total_cost}}</td></tr>
    </table>
    <p>You will get a WhatsApp confirmation as workers accept.</p>
    <p style="color: #888; font-size: 12px;">This is an automated message, please do not reply.</p>
  </body>
</html>"#;

pub async fn send_requirement_email(
    config: &Config,
    business: &BusinessUser,
    booking: &BusinessBooking,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let subject = format!("Staffing requirement received: {}", booking.service_type);

    let rate_per_day = booking
        .negotiated_price
        .as_ref()
        .and_then(|p| p.to_f64())
        .map(|p| format!("Rs {:.2}", p))
        .unwrap_or_else(|| "To be confirmed".to_string());
    let total_cost = booking
        .total_cost
        .as_ref()
        .and_then(|p| p.to_f64())
        .map(|p| format!("Rs {:.2}", p))
        .unwrap_or_else(|| "To be confirmed".to_string());

    let placeholders = vec![
        ("{{contact_name}}".to_string(), business.name.clone()),
        ("{{company_name}}".to_string(), business.company_name.clone()),
        ("{{service_type}}".to_string(), booking.service_type.clone()),
        (
            "{{workers_needed}}".to_string(),
            booking.workers_needed.to_string(),
        ),
        ("{{duration}}".to_string(), booking.duration.clone()),
        ("{{location}}".to_string(), booking.location.clone()),
        (
            "{{number_of_days}}".to_string(),
            booking
                .number_of_days
                .map(|d| d.to_string())
                .unwrap_or_else(|| "1".to_string()),
        ),
        ("{{rate_per_day}}".to_string(), rate_per_day),
        ("{{total_cost}}".to_string(), total_cost),
    ];

    send_email(
        config,
        &business.email,
        &subject,
        REQUIREMENT_TEMPLATE,
        &placeholders,
    )
    .await
}
