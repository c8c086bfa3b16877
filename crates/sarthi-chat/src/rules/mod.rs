//! Declarative rule tables for the answer cascade.
//!
//! Each locale owns one [`RuleTable`]: an ordered list of [`Rule`] records
//! (priority, topic, predicate over keyword sets, response). Tables are built
//! once and are read-only afterwards.

mod en;
mod hi;

use std::fmt;
use std::sync::LazyLock;

use sarthi_core::Locale;

// =============================================================================
// Topics
// =============================================================================

/// Subject a rule (or a how-much branch) answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// "How much" combined with agrovoltaics.
    HowMuchAgrovoltaics,
    /// The generic "how much" dispatch group.
    HowMuch,
    Substation,
    SmallFarmer,
    Documents,
    Agrovoltaics,
    SunIntensity,
    Payback,
    InstallTimeline,
    Benefits,
    Eligibility,
    Subsidy,
    Tender,
    Maintenance,
    Land,
    Feeder,
    DaytimeHours,
    Agency,
    HowItWorks,
    FarmingImpact,
    DosAndDonts,
    Loan,
    /// "How much" with no recognisable sub-topic.
    Clarify,
    /// Nothing matched.
    Fallback,
}

impl Topic {
    /// Cascade position. Lower values are evaluated first; identical for every locale.
    pub fn priority(self) -> u16 {
        match self {
            Topic::HowMuchAgrovoltaics => 10,
            Topic::HowMuch => 20,
            Topic::Substation => 30,
            Topic::SmallFarmer => 40,
            Topic::Documents => 50,
            Topic::Agrovoltaics => 60,
            Topic::SunIntensity => 70,
            Topic::Payback => 80,
            Topic::InstallTimeline => 90,
            Topic::Benefits => 100,
            Topic::Eligibility => 110,
            Topic::Subsidy => 120,
            Topic::Tender => 130,
            Topic::Maintenance => 140,
            Topic::Land => 150,
            Topic::Feeder => 160,
            Topic::DaytimeHours => 170,
            Topic::Agency => 180,
            Topic::HowItWorks => 190,
            Topic::FarmingImpact => 200,
            Topic::DosAndDonts => 210,
            Topic::Loan => 220,
            Topic::Clarify | Topic::Fallback => u16::MAX,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Topic::HowMuchAgrovoltaics => "how_much_agrovoltaics",
            Topic::HowMuch => "how_much",
            Topic::Substation => "substation",
            Topic::SmallFarmer => "small_farmer",
            Topic::Documents => "documents",
            Topic::Agrovoltaics => "agrovoltaics",
            Topic::SunIntensity => "sun_intensity",
            Topic::Payback => "payback",
            Topic::InstallTimeline => "install_timeline",
            Topic::Benefits => "benefits",
            Topic::Eligibility => "eligibility",
            Topic::Subsidy => "subsidy",
            Topic::Tender => "tender",
            Topic::Maintenance => "maintenance",
            Topic::Land => "land",
            Topic::Feeder => "feeder",
            Topic::DaytimeHours => "daytime_hours",
            Topic::Agency => "agency",
            Topic::HowItWorks => "how_it_works",
            Topic::FarmingImpact => "farming_impact",
            Topic::DosAndDonts => "dos_and_donts",
            Topic::Loan => "loan",
            Topic::Clarify => "clarify",
            Topic::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Keyword sets and predicates
// =============================================================================

/// Case-insensitive substring keywords. Entries are lowercased on construction.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new(keywords: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// First keyword contained in `haystack`, which must already be lowercase.
    pub fn first_match(&self, haystack: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| haystack.contains(k.as_str()))
            .map(String::as_str)
    }

    pub fn matches(&self, haystack: &str) -> bool {
        self.first_match(haystack).is_some()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Boolean test over keyword sets.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Any keyword of the set is contained in the utterance.
    Any(KeywordSet),
    /// Every inner predicate holds.
    All(Vec<Predicate>),
    /// At least one inner predicate holds.
    Either(Vec<Predicate>),
}

impl Predicate {
    pub fn any(keywords: &[&str]) -> Self {
        Predicate::Any(KeywordSet::new(keywords))
    }

    pub fn matches(&self, haystack: &str) -> bool {
        match self {
            Predicate::Any(set) => set.matches(haystack),
            Predicate::All(inner) => inner.iter().all(|p| p.matches(haystack)),
            Predicate::Either(inner) => inner.iter().any(|p| p.matches(haystack)),
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

/// One arm of a two-level dispatch.
#[derive(Debug, Clone)]
pub struct Branch {
    pub topic: Topic,
    pub when: Predicate,
    pub text: &'static str,
}

/// Second-stage decision: the first branch whose predicate holds wins,
/// otherwise the clarifying prompt is returned.
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub branches: Vec<Branch>,
    pub otherwise: &'static str,
}

impl Dispatch {
    pub fn select(&self, haystack: &str) -> (Topic, &'static str) {
        self.branches
            .iter()
            .find(|b| b.when.matches(haystack))
            .map(|b| (b.topic, b.text))
            .unwrap_or((Topic::Clarify, self.otherwise))
    }
}

/// What a rule answers with once its predicate holds.
#[derive(Debug, Clone)]
pub enum Response {
    Text(&'static str),
    Dispatch(Dispatch),
}

/// One record of the cascade.
#[derive(Debug, Clone)]
pub struct Rule {
    pub priority: u16,
    pub topic: Topic,
    pub when: Predicate,
    pub response: Response,
}

impl Rule {
    pub fn text(topic: Topic, when: Predicate, text: &'static str) -> Self {
        Self {
            priority: topic.priority(),
            topic,
            when,
            response: Response::Text(text),
        }
    }

    pub fn dispatch(topic: Topic, when: Predicate, dispatch: Dispatch) -> Self {
        Self {
            priority: topic.priority(),
            topic,
            when,
            response: Response::Dispatch(dispatch),
        }
    }
}

// =============================================================================
// Locale tables
// =============================================================================

/// Fixed interface text for one locale.
#[derive(Debug, Clone, Copy)]
pub struct LocaleCopy {
    pub heading: &'static str,
    pub greeting: &'static str,
    pub placeholder: &'static str,
    pub voice_unavailable: &'static str,
    pub muted: &'static str,
    pub unmuted: &'static str,
    pub start_voice: &'static str,
    pub stop_voice: &'static str,
}

/// All rules and fixed text for one locale, sorted by priority.
#[derive(Debug, Clone)]
pub struct RuleTable {
    pub locale: Locale,
    pub rules: Vec<Rule>,
    pub fallback: &'static str,
    pub copy: LocaleCopy,
}

impl RuleTable {
    pub fn new(
        locale: Locale,
        mut rules: Vec<Rule>,
        fallback: &'static str,
        copy: LocaleCopy,
    ) -> Self {
        rules.sort_by_key(|r| r.priority);
        Self {
            locale,
            rules,
            fallback,
            copy,
        }
    }

    pub fn rule(&self, topic: Topic) -> Option<&Rule> {
        self.rules.iter().find(|r| r.topic == topic)
    }
}

static HINDI: LazyLock<RuleTable> = LazyLock::new(hi::table);
static ENGLISH: LazyLock<RuleTable> = LazyLock::new(en::table);

/// The rule table for `locale`.
pub fn table(locale: Locale) -> &'static RuleTable {
    match locale {
        Locale::Hi => &HINDI,
        Locale::En => &ENGLISH,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_set_lowercases_entries() {
        let set = KeywordSet::new(&["PM KUSUM", "Kitni EMI deni"]);
        assert!(set.matches("what is pm kusum"));
        assert!(set.matches("kitni emi deni hogi"));
        assert!(!set.matches("PM KUSUM"));
    }

    #[test]
    fn test_keyword_set_first_match_follows_order() {
        let set = KeywordSet::new(&["small farmer", "farmer"]);
        assert_eq!(set.first_match("i am a small farmer"), Some("small farmer"));
        assert_eq!(set.first_match("i am a farmer"), Some("farmer"));
        assert_eq!(set.first_match("hello"), None);
    }

    #[test]
    fn test_keyword_set_duplicates_are_harmless() {
        let set = KeywordSet::new(&["एकड़", "एकड़", "acre"]);
        assert_eq!(set.len(), 3);
        assert!(set.matches("2 एकड़"));
        assert!(!KeywordSet::new(&[]).matches("anything"));
        assert!(KeywordSet::new(&[]).is_empty());
    }

    #[test]
    fn test_predicate_combinators() {
        let small_farmer = Predicate::Either(vec![
            Predicate::any(&["small farmer"]),
            Predicate::All(vec![
                Predicate::any(&["small"]),
                Predicate::any(&["farmer"]),
            ]),
        ]);
        assert!(small_farmer.matches("small farmer"));
        assert!(small_farmer.matches("i am a farmer with small plot"));
        assert!(!small_farmer.matches("small plot"));
        assert!(!small_farmer.matches("farmer"));
    }

    #[test]
    fn test_dispatch_first_branch_wins() {
        let dispatch = Dispatch {
            branches: vec![
                Branch {
                    topic: Topic::Loan,
                    when: Predicate::any(&["emi"]),
                    text: "loan",
                },
                Branch {
                    topic: Topic::Subsidy,
                    when: Predicate::any(&["cost"]),
                    text: "cost",
                },
            ],
            otherwise: "what?",
        };
        assert_eq!(dispatch.select("emi cost"), (Topic::Loan, "loan"));
        assert_eq!(dispatch.select("cost"), (Topic::Subsidy, "cost"));
        assert_eq!(dispatch.select("sunlight"), (Topic::Clarify, "what?"));
    }

    #[test]
    fn test_rule_table_sorted_by_priority() {
        let rules = vec![
            Rule::text(Topic::Loan, Predicate::any(&["loan"]), "l"),
            Rule::text(Topic::Substation, Predicate::any(&["5 km"]), "s"),
        ];
        let copy = LocaleCopy {
            heading: "",
            greeting: "",
            placeholder: "",
            voice_unavailable: "",
            muted: "",
            unmuted: "",
            start_voice: "",
            stop_voice: "",
        };
        let table = RuleTable::new(Locale::En, rules, "fallback", copy);
        assert_eq!(table.rules[0].topic, Topic::Substation);
        assert_eq!(table.rules[1].topic, Topic::Loan);
    }

    #[test]
    fn test_both_locales_share_cascade_order() {
        for locale in Locale::ALL {
            let t = table(locale);
            assert_eq!(t.locale, locale);
            let topics: Vec<Topic> = t.rules.iter().map(|r| r.topic).collect();
            assert_eq!(
                topics,
                vec![
                    Topic::HowMuchAgrovoltaics,
                    Topic::HowMuch,
                    Topic::Substation,
                    Topic::SmallFarmer,
                    Topic::Documents,
                    Topic::Agrovoltaics,
                    Topic::SunIntensity,
                    Topic::Payback,
                    Topic::InstallTimeline,
                    Topic::Benefits,
                    Topic::Eligibility,
                    Topic::Subsidy,
                    Topic::Tender,
                    Topic::Maintenance,
                    Topic::Land,
                    Topic::Feeder,
                    Topic::DaytimeHours,
                    Topic::Agency,
                    Topic::HowItWorks,
                    Topic::FarmingImpact,
                    Topic::DosAndDonts,
                    Topic::Loan,
                ],
                "cascade order differs for {locale}"
            );
        }
    }

    #[test]
    fn test_how_much_branch_order() {
        for locale in Locale::ALL {
            let rule = table(locale).rule(Topic::HowMuch).unwrap();
            let Response::Dispatch(dispatch) = &rule.response else {
                panic!("how-much rule must dispatch for {locale}");
            };
            let order: Vec<Topic> = dispatch.branches.iter().map(|b| b.topic).collect();
            assert_eq!(
                order,
                vec![
                    Topic::Loan,
                    Topic::Payback,
                    Topic::SunIntensity,
                    Topic::Subsidy,
                    Topic::Land,
                    Topic::DaytimeHours,
                ]
            );
        }
    }

    #[test]
    fn test_every_response_is_non_empty() {
        for locale in Locale::ALL {
            let t = table(locale);
            assert!(!t.fallback.is_empty());
            assert!(!t.copy.greeting.is_empty());
            for rule in &t.rules {
                match &rule.response {
                    Response::Text(text) => assert!(!text.is_empty(), "{}", rule.topic),
                    Response::Dispatch(d) => {
                        assert!(!d.otherwise.is_empty());
                        assert!(d.branches.iter().all(|b| !b.text.is_empty()));
                    }
                }
            }
        }
    }
}
