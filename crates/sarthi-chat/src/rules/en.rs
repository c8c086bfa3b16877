//! English rule table.

use sarthi_core::Locale;

use super::{Branch, Dispatch, LocaleCopy, Predicate, Rule, RuleTable, Topic};

// =============================================================================
// How-much trigger and its sub-topics
// =============================================================================

const HOW_WORDS: &[&str] = &[
    "how much",
    "how many",
    "kitna",
    "kitni",
    "kitne",
    "how long",
    "what is the minimum",
    "minimum land",
    "land required",
    "land needed",
];

const AGRO_HOW: &[&str] = &[
    "agrovoltaic",
    "agrovoltiac",
    "agrivoltaic",
    "agro voltaic",
    "agro voltaics",
    "agro",
    "agro solar",
    "agro pv",
    "agri pv",
    "solar farming",
    "crop under panel",
    "shade crop",
];

const EMI_HINT: &[&str] = &["emi", "emi amount", "emi how much", "loan", "bank loan"];

const ROI_NEXT: &[&str] = &[
    "years", "year", "payback", "return", "roi", "days", "day", "months", "month", "weeks", "week",
];

const SUN_NEXT: &[&str] = &["sun", "sunlight", "sun hours", "psh", "insolation"];

const COST_NEXT: &[&str] = &["money", "cost", "pay", "amount", "price"];

const LAND_NEXT: &[&str] = &[
    "land",
    "acre",
    "how much land",
    "land requirement",
    "minimum land",
    "land required",
    "land needed",
    "minimum area",
    "area required",
    "min land",
    "min area",
];

const HOUR_NEXT: &[&str] = &["hours", "power"];

// =============================================================================
// Fixed-phrase groups
// =============================================================================

const SUBSTATION: &[&str] = &[
    "5 km",
    "5km",
    "5 kilometer",
    "five km",
    "sub station",
    "sub-station",
    "substation",
    "nearest sub",
    "5km radius",
    "within 5km",
    "distance from substation",
];

const SMALL_FARMER: &[&str] = &[
    "small farmer",
    "small farmers",
    "small land",
    "little land",
    "smallholder",
    "small holder",
    "group apply",
    "community apply",
    "can small farmers apply",
    "is it not for small farmers",
    "fpo apply",
    "farmer group",
];

const DOCUMENTS: &[&str] = &[
    "document",
    "documents",
    "paper",
    "papers",
    "doc",
    "pan card",
    "digital signature",
    "dsc",
    "e sign",
    "email",
    "telephone",
    "mobile number",
    "emudhra",
    "emudhra.com",
];

const AGRO: &[&str] = &[
    "agrovoltaic",
    "agrovoltiac",
    "agrivoltaic",
    "agro voltaic",
    "agro voltaics",
    "agri pv",
    "agro pv",
    "agro solar",
    "solar farming",
    "crop under panel",
    "under panel crop",
    "shade crop",
];

const INTENSITY: &[&str] = &[
    "sun hours",
    "sun hour",
    "peak sun",
    "peak-sun",
    "psh",
    "solar radiation",
    "insolation",
    "how much sun",
    "how many sun hours",
];

const ROI: &[&str] = &[
    "payback",
    "payback period",
    "roi",
    "return on investment",
    "how long to recover",
    "how many years to recover",
    "how many days",
    "days to recover",
];

const INSTALL_TIME: &[&str] = &[
    "time from installation",
    "time from install",
    "installation to generation",
    "from installation to generation",
    "till generation",
    "when will generation start",
    "generation",
    "time to start generation",
];

const BENEFIT: &[&str] = &["benefit", "benefits", "profit", "advantage"];

const ELIGIBILITY: &[&str] = &[
    "eligible",
    "eligibility",
    "who can apply",
    "who is eligible",
    "who all can apply",
];

const SUBSIDY: &[&str] = &[
    "subsidy",
    "grant",
    "how much pay",
    "farmer share",
    "cost",
    "payment",
];

const TENDER: &[&str] = &[
    "tender",
    "tender charges",
    "tender charge",
    "tender fee",
    "tender fees",
    "document fee",
    "document charge",
    "reference document charge",
    "bidding charge",
    "bid charge",
    "bidder charge",
    "bidding fee",
    "emd",
    "earnest money",
    "earnest money deposit",
    "emd amount",
];

const MAINTENANCE: &[&str] = &[
    "maintenance",
    "cleaning",
    "lifetime of solar panel",
    "service requirements",
];

const LAND: &[&str] = &[
    "how much land",
    "land requirement",
    "1 mw",
    "1mw",
    "1 megawatt",
    "acre",
    "acres",
    "land required",
    "land needed",
    "minimum land",
    "minimum area",
    "area required",
    "min land",
    "min area",
];

const FEEDER: &[&str] = &[
    "feeder level",
    "feeder solarisation",
    "feeder solarization",
    "solarisation of feeder",
    "individual pump",
    "pump solarisation",
    "pump solarization",
];

const HOURS: &[&str] = &["hours", "7 hours", "daytime power", "how many hours power"];

const AGENCY: &[&str] = &["who implements", "implementation", "mnre", "which agency"];

const WORKING: &[&str] = &[
    "how it works",
    "working",
    "work how",
    "scheme work",
    "component c",
    "kusum c",
    "pm kusum c",
    "pm-kusum c",
    "component-c",
    "pm kusum yojna",
    "PM-KUSUM scheme",
    "PM KUSUM",
    "PM KUSUM scheme",
];

const FARMING_EFFECT: &[&str] = &[
    "farming effect",
    "affect farming",
    "impact on farming",
    "impact on crops",
    "crop impact",
    "will crops be affected",
    "will crop be affected",
    "effect on crop",
    "farming under panels",
    "farming under solar",
    "effect on yield",
    "yield effect",
    "does it reduce yield",
    "will yield reduce",
];

const DOS_DONTS: &[&str] = &[
    "dos and donts",
    "dos and don'ts",
    "do and dont",
    "do and don't",
    "do's and don'ts",
    "what should i be careful",
    "what should we be careful",
    "what to be careful",
    "precautions",
    "precaution",
    "safety tips",
    "safety guideline",
    "safety guidelines",
];

const LOAN: &[&str] = &[
    "bank loan get",
    "emi how much",
    "emi",
    "emi amount",
    "bank give money",
    "bank loan",
    "loan when",
    "bank refuse",
];

// =============================================================================
// Responses
// =============================================================================

const AGRO_TEXT: &str = "Agrovoltaics (PV + farming) means using the same land for solar panels and crops. Shade-tolerant crops or fodder can be grown under the panels depending on panel height, spacing and water availability.";

const PAYBACK_TEXT: &str = "Payback / ROI depends on system cost, subsidy and energy savings. For small solar pump systems, payback is often in the range of about 4–8 years, but it varies by site and tariffs.";

const SUN_TEXT: &str = "Solar output depends on peak sun hours (PSH). Many locations see roughly 4–6 PSH per day; more peak sun hours mean more energy and longer pump runtime.";

const HOURS_TEXT: &str = "One of the key objectives is to provide at least around 7 hours of reliable daytime power for irrigation pumps, so farmers can irrigate without frequent cuts.";

const HOW_MUCH_LOAN_TEXT: &str = concat!(
    "After subsidy, loans are often available at concessional rates (around 5% in many models).\n",
    "Typical EMIs for small systems can be in the range of about ₹2–3k per month, but this varies by bank and state.\n",
    "Loan approval often takes around 7–10 days.",
);

const HOW_MUCH_COST_TEXT: &str = "In many cases you see around 60% subsidy, about 30% bank loan and roughly 10% farmer contribution.Installing a rooftop solar photovoltaic system under the KUSUM Scheme can cost a farmer around ₹42,000 to ₹49,000. Some states give about ₹1.5 crore per MW support for feeder solarisation under PM-KUSUM : - around ₹1.05 crore from central government and about ₹45 lakh from state government ( the final amount paid by the farmer depends on state and system size.)";

const HOW_MUCH_LAND_TEXT: &str = "For about 1 megawatt of solar capacity, roughly 4–5 acres ( Or 7.251 bigha / 145 Kattha) of land are typically required, though the exact figure can vary with design and site conditions. ";

const CLARIFY_TEXT: &str = "What do you want to ask — cost, sunlight, land, payback, or pump hours?";

const SUBSTATION_TEXT: &str = concat!(
    "PM-KUSUM requires the proposed site to be **within 5 km radius of the nearest substation**.\n\n",
    "✔ If your substation is **more than 5 km away**:\n",
    "  • Grid connection **cost increases**\n",
    "  • Vendor/agency will need **additional survey**\n",
    "  • **Alternative arrangements** may be possible\n\n",
    "✔ Solutions:\n",
    "  1. Check **nearest substation** using Google Maps\n",
    "  2. Confirm the distance with your **local DISCOM**\n",
    "  3. Get a **site survey** before applying",
);

const SMALL_FARMER_TEXT: &str = concat!(
    "KUSUM is not only for large farmers. Small farmers can apply as well.\n\n",
    "✔ If land area is small, farmers can apply as a group (FPO, cooperatives, panchayat groups) for a 1 MW project.\n",
    "✔ Small individual farmers can also apply for 1HP–10HP solar pumps, which require little land.\n\n",
    "So small farmers can benefit individually or through a community model.",
);

const DOCUMENTS_TEXT: &str = concat!(
    "Documents usually required for PM-KUSUM include:\n\n",
    " Aadhaar card\n",
    "Bank passbook\n",
    "Land records (khasra/khatauni/registry)\n",
    "Electricity bill / connection details\n",
    "PAN card\n",
    "Mobile number / telephone number\n",
    "Email ID\n",
    "Digital Signature Certificate (DSC) — can be obtained via services like eMudhra\n\n",
    "Some states may ask for additional documents.",
);

const INSTALL_TIME_TEXT: &str = concat!(
    "Typical time from installation to power generation:\n\n",
    "• Site survey and vendor allocation: about 7–15 days\n",
    "• Installation: about 15–25 days\n",
    "• Testing and approval: about 5–7 days\n\n",
    "So overall, it usually takes roughly 1–2 months from initial survey to actual generation, depending on state, vendor and site conditions.",
);

const BENEFITS_TEXT: &str = "KUSUM helps you get cheaper power, save diesel and earn extra income by selling solar power. It can increase farmer income by cutting energy costs and adding solar revenue while also reducing pollution.";

const ELIGIBILITY_TEXT: &str = concat!(
    "Generally individual farmers, groups, cooperatives, panchayats and FPOs can participate. ",
    "Exact rules depend on your state guidelines. Farmers can apply online for solar water pumps ",
    "from 1 HP to 10 HP, and both owners and leased-land farmers are usually eligible.\n\n",
    "For Digital Signature Certificate (DSC), you can visit: https://www.emudhra.com",
);

const SUBSIDY_TEXT: &str = "In many cases you see around 60% subsidy, about 30% bank loan and roughly 10% farmer contribution. Some states give about ₹1.5 crore per MW support for feeder solarisation under PM-KUSUM : - around ₹1.05 crore from central government and about ₹45 lakh from state government. Exact subsidy depends on your state’s policy and tender.”";

const TENDER_TEXT: &str = concat!(
    "Indicative tender / participation charges (these can vary by state and DISCOM):\n\n",
    "• Reference document charge: around ₹590\n",
    "• Bidding / participation charge: around ₹23,600\n",
    "• EMD (Earnest Money Deposit): around ₹1,00,000\n\n",
    "Always confirm the exact amounts from the latest official tender document before applying.",
);

const MAINTENANCE_TEXT: &str = "Solar panels can last for around 20–25 years and need very low maintenance. Mostly periodic cleaning and basic checking are enough.";

const LAND_TEXT: &str = "For about 1 megawatt of solar capacity, roughly 4–5 acres of land are typically required, though the exact figure can vary with design and site conditions.";

const FEEDER_TEXT: &str = "Under feeder-level solarisation, a common solar plant is installed near the agriculture feeder so that the whole feeder gets daytime solar power. In the individual pump model, a separate solar system is installed on each farmer's pump so they can run irrigation directly from their own solar power.";

const AGENCY_TEXT: &str = "PM-KUSUM is implemented by the Ministry of New and Renewable Energy (MNRE) together with state nodal agencies and electricity distribution companies (DISCOMs).";

const WORKING_TEXT: &str = "Component-C of PM-KUSUM primarily aims to power grid-connected agricultural pumps with solar energy .In this scheme, grid-connected pumps are solarised so that the farmer generates power on-site to run the pump. This reduces dependence on the grid and electricity bills while increasing clean solar generation nd also earn income by selling surplus power to the grid.";

const FARMING_EFFECT_TEXT: &str = concat!(
    "Solar does not mean you must stop farming – with proper design both can work together:\n\n",
    " Positives:\n",
    "• Panel shade can protect some crops from extreme heat and hot winds.\n",
    "• Soil moisture can stay longer, so in some cases irrigation frequency reduces slightly.\n",
    "• Shade-tolerant crops (fodder, some vegetables, some pulses) can do well under panels.\n\n",
    " Points to watch:\n",
    "• Crops that need full, strong sun may give lower yield directly under panels.\n",
    "• You must keep enough height and spacing for tractor and machinery to pass.\n",
    "• Prefer drip irrigation or controlled water flow, so electrical parts do not get wet.\n\n",
    "With the right crop mix and layout, farmers can benefit from both solar power and crops on the same land.",
);

const DOS_DONTS_TEXT: &str = concat!(
    " DOs:\n",
    "• Keep enough pathway between panel rows for people and machinery.\n",
    "• Do regular cleaning and basic visual inspection of panels and cables.\n",
    "• Use a qualified electrician for wiring and connections.\n",
    "• Prefer low/medium height crops under panels that can handle partial shade.\n",
    "• After strong storms, hail or heavy rain, inspect the structure and foundations.\n\n",
    " DON'Ts:\n",
    "• Don't plant very tall trees or crops right next to panels – this increases shading and dirt.\n",
    "• Don't leave loose or exposed wires near where people or animals move.\n",
    "• Don't put extra heavy loads on the solar structure.\n",
    "• Don't open electrical boxes yourself without proper tools and safety.\n\n",
    "Following these simple tips helps keep your system safe, long-lasting and farmer-friendly.",
);

const LOAN_TEXT: &str = "After subsidy, loans are often available at concessional rates (around 5% in many models). Typical EMIs can be in the range of ₹2–3k per month for small systems, with approval often within about 7–10 days (varies by bank and state).";

const FALLBACK_TEXT: &str = "You can ask about benefits, eligibility, required documents, subsidy, maintenance, land needed for 1 MW, feeder-level vs individual pump solarisation, agrovoltaics, sun hours, payback, implementation agencies, or how the scheme works in simple steps.";

const COPY: LocaleCopy = LocaleCopy {
    heading: "KUSUM Sarthi",
    greeting: "Hello farmer friend! What would you like to know about the KUSUM scheme?       you can use voice assistant also to ask . !",
    placeholder: "Type your question here... (e.g., benefits, documents, subsidy, sun hours)",
    voice_unavailable: "Voice not supported in this browser.",
    muted: "Muted",
    unmuted: "Unmuted",
    start_voice: "Start voice",
    stop_voice: "Stop recording",
};

// =============================================================================
// Table
// =============================================================================

fn how_much() -> Dispatch {
    Dispatch {
        branches: vec![
            Branch {
                topic: Topic::Loan,
                when: Predicate::any(EMI_HINT),
                text: HOW_MUCH_LOAN_TEXT,
            },
            Branch {
                topic: Topic::Payback,
                when: Predicate::any(ROI_NEXT),
                text: PAYBACK_TEXT,
            },
            Branch {
                topic: Topic::SunIntensity,
                when: Predicate::any(SUN_NEXT),
                text: SUN_TEXT,
            },
            Branch {
                topic: Topic::Subsidy,
                when: Predicate::any(COST_NEXT),
                text: HOW_MUCH_COST_TEXT,
            },
            Branch {
                topic: Topic::Land,
                when: Predicate::any(LAND_NEXT),
                text: HOW_MUCH_LAND_TEXT,
            },
            Branch {
                topic: Topic::DaytimeHours,
                when: Predicate::any(HOUR_NEXT),
                text: HOURS_TEXT,
            },
        ],
        otherwise: CLARIFY_TEXT,
    }
}

pub(super) fn table() -> RuleTable {
    let small_farmer = Predicate::Either(vec![
        Predicate::any(SMALL_FARMER),
        Predicate::All(vec![
            Predicate::any(&["small"]),
            Predicate::any(&["farmer"]),
        ]),
    ]);

    let rules = vec![
        Rule::text(
            Topic::HowMuchAgrovoltaics,
            Predicate::All(vec![Predicate::any(HOW_WORDS), Predicate::any(AGRO_HOW)]),
            AGRO_TEXT,
        ),
        Rule::dispatch(Topic::HowMuch, Predicate::any(HOW_WORDS), how_much()),
        Rule::text(
            Topic::Substation,
            Predicate::any(SUBSTATION),
            SUBSTATION_TEXT,
        ),
        Rule::text(Topic::SmallFarmer, small_farmer, SMALL_FARMER_TEXT),
        Rule::text(Topic::Documents, Predicate::any(DOCUMENTS), DOCUMENTS_TEXT),
        Rule::text(Topic::Agrovoltaics, Predicate::any(AGRO), AGRO_TEXT),
        Rule::text(Topic::SunIntensity, Predicate::any(INTENSITY), SUN_TEXT),
        Rule::text(Topic::Payback, Predicate::any(ROI), PAYBACK_TEXT),
        Rule::text(
            Topic::InstallTimeline,
            Predicate::any(INSTALL_TIME),
            INSTALL_TIME_TEXT,
        ),
        Rule::text(Topic::Benefits, Predicate::any(BENEFIT), BENEFITS_TEXT),
        Rule::text(
            Topic::Eligibility,
            Predicate::any(ELIGIBILITY),
            ELIGIBILITY_TEXT,
        ),
        Rule::text(Topic::Subsidy, Predicate::any(SUBSIDY), SUBSIDY_TEXT),
        Rule::text(Topic::Tender, Predicate::any(TENDER), TENDER_TEXT),
        Rule::text(
            Topic::Maintenance,
            Predicate::any(MAINTENANCE),
            MAINTENANCE_TEXT,
        ),
        Rule::text(Topic::Land, Predicate::any(LAND), LAND_TEXT),
        Rule::text(Topic::Feeder, Predicate::any(FEEDER), FEEDER_TEXT),
        Rule::text(Topic::DaytimeHours, Predicate::any(HOURS), HOURS_TEXT),
        Rule::text(Topic::Agency, Predicate::any(AGENCY), AGENCY_TEXT),
        Rule::text(Topic::HowItWorks, Predicate::any(WORKING), WORKING_TEXT),
        Rule::text(
            Topic::FarmingImpact,
            Predicate::any(FARMING_EFFECT),
            FARMING_EFFECT_TEXT,
        ),
        Rule::text(
            Topic::DosAndDonts,
            Predicate::any(DOS_DONTS),
            DOS_DONTS_TEXT,
        ),
        Rule::text(Topic::Loan, Predicate::any(LOAN), LOAN_TEXT),
    ];
    RuleTable::new(Locale::En, rules, FALLBACK_TEXT, COPY)
}
