//! Static descriptions of the services built from this template.

/// Identity reported by `GET /info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoIdentity {
    pub name: &'static str,
    pub version: &'static str,
}

/// Everything that differs between two services built from the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceProfile {
    /// Used as the default OpenTelemetry service name.
    pub slug: &'static str,
    pub display_name: &'static str,
    pub greeting: &'static str,
    /// Extra `service` field on health responses.
    pub health_tag: Option<&'static str>,
    /// `GET /info` answers 404 when this is unset.
    pub info: Option<InfoIdentity>,
    pub default_port: u16,
}

pub static SERVICE_TEMPLATE_1: ServiceProfile = ServiceProfile {
    slug: "service-template-1",
    display_name: "Service Template 1",
    greeting: "Service Template 1 - Ready for customization 🚀",
    health_tag: None,
    info: None,
    default_port: 8080,
};

pub static BACKEND_SERVICE: ServiceProfile = ServiceProfile {
    slug: "backend-service",
    display_name: "Backend Service",
    greeting: "Welcome to the backend service 🚀",
    health_tag: Some("backend"),
    info: Some(InfoIdentity {
        name: "backend-service",
        version: "1.0.0",
    }),
    default_port: 8081,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_1_has_no_info_endpoint() {
        assert!(SERVICE_TEMPLATE_1.info.is_none());
        assert!(SERVICE_TEMPLATE_1.health_tag.is_none());
        assert_eq!(SERVICE_TEMPLATE_1.default_port, 8080);
    }

    #[test]
    fn test_backend_identity() {
        let info = BACKEND_SERVICE.info.expect("backend exposes /info");
        assert_eq!(info.name, "backend-service");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(BACKEND_SERVICE.health_tag, Some("backend"));
    }

    #[test]
    fn test_profiles_listen_on_distinct_ports() {
        assert_ne!(SERVICE_TEMPLATE_1.default_port, BACKEND_SERVICE.default_port);
    }
}
