use askama::Template;
use globaltrade_contact::ContactRequest;

use crate::profile::CompanyProfile;
use crate::transport::DispatchError;

/// A rendered message in both representations, so transports and clients
/// that cannot show the rich form still get readable text.
#[derive(Debug, Clone)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Both notifications for one lead.
#[derive(Debug, Clone)]
pub struct NotificationContent {
    pub visitor: EmailContent,
    pub business: EmailContent,
}

#[derive(Template)]
#[template(path = "emails/visitor-confirmation.html")]
struct VisitorHtmlTemplate<'a> {
    request: &'a ContactRequest,
    profile: &'a CompanyProfile,
}

#[derive(Template)]
#[template(path = "emails/visitor-confirmation.txt")]
struct VisitorTextTemplate<'a> {
    request: &'a ContactRequest,
    profile: &'a CompanyProfile,
}

#[derive(Template)]
#[template(path = "emails/lead-alert.html")]
struct LeadAlertHtmlTemplate<'a> {
    request: &'a ContactRequest,
}

#[derive(Template)]
#[template(path = "emails/lead-alert.txt")]
struct LeadAlertTextTemplate<'a> {
    request: &'a ContactRequest,
}

/// Render the visitor confirmation and the business lead alert.
///
/// Pure apart from template rendering; a render failure is a programming
/// error and is reported as such rather than silently dropped.
pub fn compose(
    request: &ContactRequest,
    profile: &CompanyProfile,
) -> Result<NotificationContent, DispatchError> {
    let visitor = EmailContent {
        subject: format!("Thank you for contacting {}", profile.brand),
        html: VisitorHtmlTemplate { request, profile }.render()?,
        text: VisitorTextTemplate { request, profile }.render()?,
    };

    let business = EmailContent {
        subject: format!("New lead: {} ({})", request.name, request.service),
        html: LeadAlertHtmlTemplate { request }.render()?,
        text: LeadAlertTextTemplate { request }.render()?,
    };

    Ok(NotificationContent { visitor, business })
}

#[cfg(test)]
mod tests {
    use globaltrade_contact::ContactFields;

    use super::*;

    fn request() -> ContactRequest {
        ContactFields {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            phone: "+260 97 0000000".into(),
            company: "Acme Ltd".into(),
            service: "Web Application Development".into(),
            message: "Please send pricing".into(),
        }
        .into_request()
        .expect("fixture should validate")
    }

    #[test]
    fn visitor_confirmation_addresses_the_visitor() {
        let content = compose(&request(), &CompanyProfile::default()).unwrap();
        assert!(content.visitor.subject.contains("GlobalTech&Trade"));
        assert!(content.visitor.html.contains("Jane"));
        assert!(content.visitor.text.contains("Jane"));
        assert!(content.visitor.text.contains("Web Application Development"));
    }

    #[test]
    fn visitor_confirmation_carries_the_office_numbers() {
        let profile = CompanyProfile::default();
        let content = compose(&request(), &profile).unwrap();
        assert!(content.visitor.html.contains(&profile.india_phone));
        assert!(content.visitor.html.contains(&profile.zambia_phone));
        assert!(content.visitor.text.contains(&profile.support_email));
    }

    #[test]
    fn lead_alert_carries_every_submitted_field() {
        let content = compose(&request(), &CompanyProfile::default()).unwrap();
        for needle in [
            "Jane",
            "jane@x.com",
            "+260 97 0000000",
            "Acme Ltd",
            "Please send pricing",
        ] {
            assert!(
                content.business.html.contains(needle),
                "missing {needle} in html body"
            );
            assert!(
                content.business.text.contains(needle),
                "missing {needle} in text body"
            );
        }
        assert_eq!(
            content.business.subject,
            "New lead: Jane (Web Application Development)"
        );
    }

    #[test]
    fn html_body_escapes_markup_in_the_message() {
        let raw = ContactFields {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            message: "<script>alert(1)</script> pricing please".into(),
            ..ContactFields::default()
        }
        .into_request()
        .unwrap();
        let content = compose(&raw, &CompanyProfile::default()).unwrap();
        assert!(!content.business.html.contains("<script>"));
        assert!(content.business.text.contains("<script>"));
    }
}
