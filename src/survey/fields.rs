/// Survey field definitions
///
/// Defines the fourteen fields of the churn survey in entry order.

use super::rules::ValueRule;

/// Survey field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurveyField {
    /// Two-letter state code (e.g. AL, TX)
    State,

    /// Account length in months
    AccountLength,

    /// Whether the customer has an international plan
    InternationalPlan,

    /// Whether the customer has a voice mail plan
    VoiceMailPlan,

    /// Number of voice mail messages
    VmailMessages,

    /// Total daytime call minutes
    DayMinutes,

    /// Total daytime call count
    DayCalls,

    /// Total evening call minutes
    EveMinutes,

    /// Total evening call count
    EveCalls,

    /// Total night call minutes
    NightMinutes,

    /// Total night call count
    NightCalls,

    /// Total international call minutes
    IntlMinutes,

    /// Total international call count
    IntlCalls,

    /// Number of customer service calls
    ServiceCalls,
}

impl SurveyField {
    /// Get the field label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            SurveyField::State => "State",
            SurveyField::AccountLength => "Account Length",
            SurveyField::InternationalPlan => "International Plan",
            SurveyField::VoiceMailPlan => "Voice Mail Plan",
            SurveyField::VmailMessages => "Number of Voice Mail Messages",
            SurveyField::DayMinutes => "Total Day Minutes",
            SurveyField::DayCalls => "Total Day Calls",
            SurveyField::EveMinutes => "Total Evening Minutes",
            SurveyField::EveCalls => "Total Evening Calls",
            SurveyField::NightMinutes => "Total Night Minutes",
            SurveyField::NightCalls => "Total Night Calls",
            SurveyField::IntlMinutes => "Total International Minutes",
            SurveyField::IntlCalls => "Total International Calls",
            SurveyField::ServiceCalls => "Customer Service Calls",
        }
    }

    /// Get the storage key used in the submission payload
    pub fn key(&self) -> &'static str {
        match self {
            SurveyField::State => "State",
            SurveyField::AccountLength => "Account_length",
            SurveyField::InternationalPlan => "International_plan",
            SurveyField::VoiceMailPlan => "Voice_mail_plan",
            SurveyField::VmailMessages => "Number_vmail_messages",
            SurveyField::DayMinutes => "Total_day_minutes",
            SurveyField::DayCalls => "Total_day_calls",
            SurveyField::EveMinutes => "Total_eve_minutes",
            SurveyField::EveCalls => "Total_eve_calls",
            SurveyField::NightMinutes => "Total_night_minutes",
            SurveyField::NightCalls => "Total_night_calls",
            SurveyField::IntlMinutes => "Total_intl_minutes",
            SurveyField::IntlCalls => "Total_intl_calls",
            SurveyField::ServiceCalls => "Customer_service_calls",
        }
    }

    /// Get the placeholder hint shown in the empty input
    pub fn placeholder(&self) -> &'static str {
        match self {
            SurveyField::State => "Enter state (e.g., AL, TX)",
            SurveyField::AccountLength => "Enter account length",
            SurveyField::InternationalPlan => "Yes / No",
            SurveyField::VoiceMailPlan => "Yes / No",
            SurveyField::VmailMessages => "Enter number",
            SurveyField::DayMinutes => "Enter minutes",
            SurveyField::DayCalls => "Enter calls",
            SurveyField::EveMinutes => "Enter minutes",
            SurveyField::EveCalls => "Enter calls",
            SurveyField::NightMinutes => "Enter minutes",
            SurveyField::NightCalls => "Enter calls",
            SurveyField::IntlMinutes => "Enter minutes",
            SurveyField::IntlCalls => "Enter calls",
            SurveyField::ServiceCalls => "Enter calls",
        }
    }

    /// Get the format rule this field's value must satisfy
    pub fn rule(&self) -> ValueRule {
        match self {
            SurveyField::State => ValueRule::RegionCode,
            SurveyField::AccountLength => ValueRule::Count,
            SurveyField::InternationalPlan => ValueRule::YesNo,
            SurveyField::VoiceMailPlan => ValueRule::YesNo,
            SurveyField::VmailMessages => ValueRule::Count,
            SurveyField::DayMinutes => ValueRule::Minutes,
            SurveyField::DayCalls => ValueRule::Count,
            SurveyField::EveMinutes => ValueRule::Minutes,
            SurveyField::EveCalls => ValueRule::Count,
            SurveyField::NightMinutes => ValueRule::Minutes,
            SurveyField::NightCalls => ValueRule::Count,
            SurveyField::IntlMinutes => ValueRule::Minutes,
            SurveyField::IntlCalls => ValueRule::Count,
            SurveyField::ServiceCalls => ValueRule::Count,
        }
    }

    /// Get step number (1-indexed)
    pub fn number(&self) -> usize {
        match self {
            SurveyField::State => 1,
            SurveyField::AccountLength => 2,
            SurveyField::InternationalPlan => 3,
            SurveyField::VoiceMailPlan => 4,
            SurveyField::VmailMessages => 5,
            SurveyField::DayMinutes => 6,
            SurveyField::DayCalls => 7,
            SurveyField::EveMinutes => 8,
            SurveyField::EveCalls => 9,
            SurveyField::NightMinutes => 10,
            SurveyField::NightCalls => 11,
            SurveyField::IntlMinutes => 12,
            SurveyField::IntlCalls => 13,
            SurveyField::ServiceCalls => 14,
        }
    }

    /// Get total number of fields
    pub fn total() -> usize {
        14
    }

    /// Check if this is the first field
    pub fn is_first(&self) -> bool {
        matches!(self, SurveyField::State)
    }

    /// Check if this is the last field
    pub fn is_last(&self) -> bool {
        matches!(self, SurveyField::ServiceCalls)
    }

    /// Get next field
    pub fn next(&self) -> Option<SurveyField> {
        match self {
            SurveyField::State => Some(SurveyField::AccountLength),
            SurveyField::AccountLength => Some(SurveyField::InternationalPlan),
            SurveyField::InternationalPlan => Some(SurveyField::VoiceMailPlan),
            SurveyField::VoiceMailPlan => Some(SurveyField::VmailMessages),
            SurveyField::VmailMessages => Some(SurveyField::DayMinutes),
            SurveyField::DayMinutes => Some(SurveyField::DayCalls),
            SurveyField::DayCalls => Some(SurveyField::EveMinutes),
            SurveyField::EveMinutes => Some(SurveyField::EveCalls),
            SurveyField::EveCalls => Some(SurveyField::NightMinutes),
            SurveyField::NightMinutes => Some(SurveyField::NightCalls),
            SurveyField::NightCalls => Some(SurveyField::IntlMinutes),
            SurveyField::IntlMinutes => Some(SurveyField::IntlCalls),
            SurveyField::IntlCalls => Some(SurveyField::ServiceCalls),
            SurveyField::ServiceCalls => None,
        }
    }

    /// Get previous field
    pub fn previous(&self) -> Option<SurveyField> {
        match self {
            SurveyField::State => None,
            SurveyField::AccountLength => Some(SurveyField::State),
            SurveyField::InternationalPlan => Some(SurveyField::AccountLength),
            SurveyField::VoiceMailPlan => Some(SurveyField::InternationalPlan),
            SurveyField::VmailMessages => Some(SurveyField::VoiceMailPlan),
            SurveyField::DayMinutes => Some(SurveyField::VmailMessages),
            SurveyField::DayCalls => Some(SurveyField::DayMinutes),
            SurveyField::EveMinutes => Some(SurveyField::DayCalls),
            SurveyField::EveCalls => Some(SurveyField::EveMinutes),
            SurveyField::NightMinutes => Some(SurveyField::EveCalls),
            SurveyField::NightCalls => Some(SurveyField::NightMinutes),
            SurveyField::IntlMinutes => Some(SurveyField::NightCalls),
            SurveyField::IntlCalls => Some(SurveyField::IntlMinutes),
            SurveyField::ServiceCalls => Some(SurveyField::IntlCalls),
        }
    }

    /// Get all fields in entry order
    pub fn all() -> Vec<SurveyField> {
        vec![
            SurveyField::State,
            SurveyField::AccountLength,
            SurveyField::InternationalPlan,
            SurveyField::VoiceMailPlan,
            SurveyField::VmailMessages,
            SurveyField::DayMinutes,
            SurveyField::DayCalls,
            SurveyField::EveMinutes,
            SurveyField::EveCalls,
            SurveyField::NightMinutes,
            SurveyField::NightCalls,
            SurveyField::IntlMinutes,
            SurveyField::IntlCalls,
            SurveyField::ServiceCalls,
        ]
    }
}

impl Default for SurveyField {
    fn default() -> Self {
        SurveyField::State
    }
}

impl std::fmt::Display for SurveyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
