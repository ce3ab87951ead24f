//! Static page content. Everything here is defined at compile time and
//! never mutated.

/// Marker separating the stages of a threat mechanism.
pub const STAGE_MARKER: &str = " → ";
/// Separator of the comma-separated impact strings.
pub const IMPACT_SEPARATOR: &str = ", ";

/// Glyph references rendered by the icon layer. Only the identifier matters
/// to the page; the symbol is a text fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Shield,
    Alert,
    Lock,
    Zap,
    Eye,
    Brain,
    Database,
    Network,
    Bug,
    Check,
    Terminal,
    Play,
    Arrow,
}

impl Icon {
    pub fn id(self) -> &'static str {
        match self {
            Icon::Shield => "shield",
            Icon::Alert => "alert-triangle",
            Icon::Lock => "lock",
            Icon::Zap => "zap",
            Icon::Eye => "eye",
            Icon::Brain => "brain",
            Icon::Database => "database",
            Icon::Network => "network",
            Icon::Bug => "bug",
            Icon::Check => "check-circle",
            Icon::Terminal => "terminal",
            Icon::Play => "play",
            Icon::Arrow => "arrow-right",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Icon::Shield => "🛡",
            Icon::Alert => "⚠",
            Icon::Lock => "🔒",
            Icon::Zap => "⚡",
            Icon::Eye => "👁",
            Icon::Brain => "🧠",
            Icon::Database => "🗄",
            Icon::Network => "🌐",
            Icon::Bug => "🐞",
            Icon::Check => "✔",
            Icon::Terminal => "›_",
            Icon::Play => "▶",
            Icon::Arrow => "→",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ThreatRecord {
    pub ordinal: &'static str,
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub mechanism: &'static str,
    pub impact: &'static str,
}

impl ThreatRecord {
    pub fn impact_tags(&self) -> Vec<&'static str> {
        split_nonempty(self.impact, IMPACT_SEPARATOR)
    }

    pub fn mechanism_stages(&self) -> Vec<&'static str> {
        split_nonempty(self.mechanism, STAGE_MARKER)
    }
}

fn split_nonempty(text: &'static str, separator: &str) -> Vec<&'static str> {
    text.split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// An attack vector or a prevention strategy.
#[derive(Debug, PartialEq)]
pub struct Briefing {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub type VectorRecord = Briefing;
pub type StrategyRecord = Briefing;

pub static THREATS: [ThreatRecord; 6] = [
    ThreatRecord {
        ordinal: "01",
        glyph: "🎣",
        title: "PHISHING",
        description: "Deceptive attacks masquerading as trustworthy entities to steal credentials through fake emails and websites.",
        mechanism: "Creates fake communication → Triggers urgency → Victim clicks link → Credentials stolen",
        impact: "Credential theft, Financial loss, Identity theft",
    },
    ThreatRecord {
        ordinal: "02",
        glyph: "💉",
        title: "SQL INJECTION",
        description: "Malicious SQL code injection into input fields to manipulate databases and extract sensitive data.",
        mechanism: "Finds vulnerable input → Injects SQL commands → Bypasses security → Extracts database",
        impact: "Data breach, Authentication bypass, Admin access",
    },
    ThreatRecord {
        ordinal: "03",
        glyph: "👤",
        title: "MAN-IN-THE-MIDDLE",
        description: "Secretly intercepting communications between two parties to steal or manipulate data in transit.",
        mechanism: "Positions in network path → Intercepts traffic → Reads/modifies data → Remains undetected",
        impact: "Session hijacking, Data eavesdropping, Credential theft",
    },
    ThreatRecord {
        ordinal: "04",
        glyph: "⚡",
        title: "CROSS-SITE SCRIPTING",
        description: "Injecting malicious JavaScript into trusted websites that executes in victims' browsers.",
        mechanism: "Finds unvalidated input → Injects script → Executes in browser → Steals data",
        impact: "Cookie theft, Session hijacking, Website defacement",
    },
    ThreatRecord {
        ordinal: "05",
        glyph: "🌊",
        title: "DDoS ATTACK",
        description: "Overwhelming target servers with massive traffic from botnets to cause service disruption.",
        mechanism: "Builds botnet → Commands via C2 → Floods target → Server crashes",
        impact: "Complete downtime, Revenue loss, Infrastructure damage",
    },
    ThreatRecord {
        ordinal: "06",
        glyph: "🔐",
        title: "RANSOMWARE",
        description: "Malicious software that encrypts victim's files and demands payment for decryption keys.",
        mechanism: "Gains access → Encrypts files → Displays ransom note → Demands cryptocurrency payment",
        impact: "Data loss, Business disruption, Financial extortion",
    },
];

pub static VECTORS: [VectorRecord; 4] = [
    Briefing {
        title: "SOCIAL ENGINEERING",
        description: "Manipulating human psychology to trick users into revealing sensitive information or performing security-compromising actions.",
        icon: Icon::Brain,
    },
    Briefing {
        title: "TECHNICAL EXPLOITS",
        description: "Exploiting software vulnerabilities and system weaknesses to gain unauthorized access and control.",
        icon: Icon::Zap,
    },
    Briefing {
        title: "CREDENTIAL THEFT",
        description: "Stealing usernames, passwords, and authentication tokens through various attack methods.",
        icon: Icon::Lock,
    },
    Briefing {
        title: "DATA EXFILTRATION",
        description: "Extracting sensitive data from systems and networks without detection or authorization.",
        icon: Icon::Database,
    },
];

pub static STRATEGIES: [StrategyRecord; 6] = [
    Briefing {
        title: "EMPLOYEE TRAINING",
        description: "Regular security awareness programs to educate users about phishing, social engineering, and best practices.",
        icon: Icon::Brain,
    },
    Briefing {
        title: "MULTI-FACTOR AUTH",
        description: "Implement strong authentication methods to prevent unauthorized access even if credentials are compromised.",
        icon: Icon::Lock,
    },
    Briefing {
        title: "NETWORK SECURITY",
        description: "Deploy firewalls, intrusion detection systems, and network segmentation to protect against unauthorized access.",
        icon: Icon::Network,
    },
    Briefing {
        title: "DATA PROTECTION",
        description: "Encrypt sensitive data, implement access controls, and monitor data access patterns for anomalies.",
        icon: Icon::Shield,
    },
    Briefing {
        title: "INCIDENT RESPONSE",
        description: "Establish clear procedures to detect, respond to, and recover from security incidents quickly.",
        icon: Icon::Alert,
    },
    Briefing {
        title: "CONTINUOUS MONITORING",
        description: "Monitor systems 24/7 for suspicious activities and potential security breaches in real-time.",
        icon: Icon::Eye,
    },
];

/// Navigation labels; each one links to the section with the lowercase id.
pub const NAV_LINKS: [&str; 4] = ["THREATS", "VECTORS", "PREVENTION", "CONTACT"];

pub fn anchor_for(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

/// A node of the hero threat visualisation.
#[derive(Debug, PartialEq)]
pub struct VisualNode {
    pub icon: Icon,
    pub label: &'static str,
    /// Inline CSS position inside the visualisation box.
    pub position: &'static str,
    pub tone: &'static str,
}

pub static VISUAL_NODES: [VisualNode; 6] = [
    VisualNode { icon: Icon::Bug, label: "MALWARE", position: "top: 20%; left: 20%;", tone: "tone-red" },
    VisualNode { icon: Icon::Zap, label: "EXPLOIT", position: "top: 20%; right: 20%;", tone: "tone-yellow" },
    VisualNode { icon: Icon::Database, label: "DATA", position: "bottom: 20%; left: 20%;", tone: "tone-green" },
    VisualNode { icon: Icon::Network, label: "NETWORK", position: "bottom: 20%; right: 20%;", tone: "tone-cyan" },
    VisualNode { icon: Icon::Lock, label: "SECURE", position: "top: 50%; left: 10%;", tone: "tone-purple" },
    VisualNode { icon: Icon::Eye, label: "MONITOR", position: "top: 50%; right: 10%;", tone: "tone-blue" },
];

/// End points (percent of the box) of the lines drawn from the central node.
pub const LINK_ENDS: [(&str, &str); 6] = [
    ("20%", "20%"),
    ("80%", "20%"),
    ("20%", "80%"),
    ("80%", "80%"),
    ("10%", "50%"),
    ("90%", "50%"),
];

/// Console lines of the hero terminal block, with their tone class.
pub fn terminal_lines() -> Vec<(&'static str, String)> {
    vec![
        ("tone-yellow", "Analyzing threat landscape...".to_string()),
        ("tone-green", format!("✓ {} major threat categories identified", THREATS.len())),
        ("tone-green", "✓ Attack patterns documented".to_string()),
        ("tone-red", "⚠ Immediate mitigation required".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_complete_threats() {
        assert_eq!(THREATS.len(), 6);
        for threat in THREATS.iter() {
            assert!(!threat.title.is_empty());
            assert!(!threat.description.is_empty());
            assert!(!threat.mechanism.is_empty());
            assert!(!threat.impact_tags().is_empty(), "{} has no impact tags", threat.title);
        }
    }

    #[test]
    fn impact_splits_into_ordered_tags() {
        assert_eq!(
            THREATS[0].impact_tags(),
            vec!["Credential theft", "Financial loss", "Identity theft"]
        );
    }

    #[test]
    fn mechanism_splits_on_arrow_marker() {
        let stages = THREATS[4].mechanism_stages();
        assert_eq!(stages.len(), 4);
        assert_eq!(stages[0], "Builds botnet");
        assert_eq!(stages[3], "Server crashes");
    }

    #[test]
    fn ordinals_follow_catalog_order() {
        for (index, threat) in THREATS.iter().enumerate() {
            assert_eq!(threat.ordinal, format!("{:02}", index + 1));
        }
    }

    #[test]
    fn icon_ids_are_unique() {
        let icons = [
            Icon::Shield, Icon::Alert, Icon::Lock, Icon::Zap, Icon::Eye, Icon::Brain, Icon::Database,
            Icon::Network, Icon::Bug, Icon::Check, Icon::Terminal, Icon::Play, Icon::Arrow,
        ];
        let mut ids: Vec<_> = icons.iter().map(|icon| icon.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), icons.len());
    }

    #[test]
    fn nav_links_point_at_lowercase_sections() {
        assert_eq!(anchor_for(NAV_LINKS[2]), "#prevention");
    }

    #[test]
    fn terminal_reports_catalog_size() {
        let lines = terminal_lines();
        assert!(lines[1].1.contains("6 major threat categories"));
    }
}
