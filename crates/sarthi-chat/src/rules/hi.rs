//! Hindi rule table. Keywords mix Devanagari with romanised spellings.

use sarthi_core::Locale;

use super::{Branch, Dispatch, LocaleCopy, Predicate, Rule, RuleTable, Topic};

// =============================================================================
// How-much trigger and its sub-topics
// =============================================================================

const KITNA: &[&str] = &[
    "kitna",
    "kitni",
    "kitne",
    "कितना",
    "कितनी",
    "कितने",
    "ktna",
    "kna",
    "kitne din",
];

const AGRO_KITNA: &[&str] = &[
    "एग्रोवोल्ट",
    "agrovoltaic",
    "agrovoltiac",
    "agro voltaic",
    "agrivoltaic",
    "agro",
    "agro solar",
    "agro pv",
    "agripv",
    "solar kheti",
    "panel ke neeche",
    "pannel ke niche",
    "छाया फसल",
    "छाया वाली फसल",
];

const EMI_HINT: &[&str] = &[
    "emi",
    "ईएमआई",
    "इएमआई",
    "ई एम आई",
    "इ एम आई",
    "ई.एम.आई",
    "इ.एम.आई",
    "ई एमआइ",
    "इ एमआइ",
    "loan",
    "लोन",
    "bank loan",
    "bank se loan",
    "बैंक लोन",
    "बैंक से लोन",
    "bank loan milega",
    "बैंक लोन मिलेगा",
    "bank se paise",
    "बैंक से पैसे",
];

const ROI_NEXT: &[&str] = &[
    "saal", "sal", "year", "साल", "वापस", "वापसी", "payback", "return", "din", "दिन", "day",
    "days", "mahina", "महीना", "month", "months", "hafta", "हफ्ता", "week", "weeks",
];

const SUN_NEXT: &[&str] = &[
    "dhoop",
    "dhup",
    "sun",
    "sunlight",
    "psh",
    "peak sun",
    "धूप",
    "dhup chahiye",
    "dhoop chahiye",
    "kitni dhoop",
    "kitni dhup",
];

const COST_NEXT: &[&str] = &[
    "paisa", "paise", "खर्च", "खर्चा", "kharcha", "cost", "लगेगा", "लागत", "price", "kharc",
];

const LAND_NEXT: &[&str] = &[
    "zameen",
    "zamin",
    "land",
    "acre",
    "एकड़",
    "एक\u{095C}",
    "जमीन",
    "khet",
    "minimum land",
    "कितनी जमीन",
    "कितनी भूमि",
    "minimum area",
    "min land",
    "जमीन चाहिए",
    "जमीन की आवश्यकता",
    "land required",
    "land needed",
    "कितनी जमीन चाहिए",
    "कितनी जमीन की आवश्यकता",
];

const HOUR_NEXT: &[&str] = &[
    "ghante",
    "ghnta",
    "hour",
    "hours",
    "घंटे",
    "bijli",
    "कितने घंटे बिजली",
    "कितनी देर बिजली",
    "कितनी बिजली",
];

// =============================================================================
// Fixed-phrase groups
// =============================================================================

const SUBSTATION: &[&str] = &[
    "5 km",
    "5km",
    "5 किमी",
    "5 किलोमीटर",
    "sub station",
    "sub-station",
    "substation",
    "निकटतम सब",
    "सब स्टेशन कितना दूर ",
    "सब स्टेशन कितनी दूर?",
    "सब स्टेशन",
    "नजदीक सब",
    "सबस्टेशन",
    "5km ke andar",
    "5km radius",
    "5km door",
    "5km se",
];

const SMALL_FARMER: &[&str] = &[
    "छोटे किसान",
    "chhote kisan",
    "chhote kisaan",
    "chote kisan",
    "chote kisaan",
    "small farmer",
    "small farmers",
    "small land",
    "little land",
    "smallholder",
    "small holder",
    "कम जमीन",
    "kam zameen",
    "little zameen",
    "group apply",
    "samuh",
    "community",
    "milkar apply",
    "fpo apply",
    "chhote kisan v",
    "chhote kisaan v",
    "kya chhote kisan",
    "kya chhote kisaan",
    "chhote kisan bhi",
];

const DOCUMENTS: &[&str] = &[
    "दस्तावेज",
    "डॉक्यू",
    "कागज",
    "कागज़",
    "kaagaz",
    "kagaz",
    "kagaj",
    "document",
    "dastavej",
    "dastawej",
    "documents",
    "requirements",
    "paper",
    "papers",
    "doc",
    "pan card",
    "पैन कार्ड",
    "digital signature",
    "डिजिटल सिग्नेचर",
    "dsc",
    "e sign",
    "ई-साइन",
    "email",
    "ईमेल",
    "telephone",
    "फोन नंबर",
    "mobile number",
    "emudhra",
    "emudhra.com",
];

const AGRO: &[&str] = &[
    "एग्रोवोल्ट",
    "agrovoltaic",
    "agrovoltiac",
    "agro voltaic",
    "agrivoltaic",
    "agro",
    "agro solar",
    "agro pv",
    "agripv",
    "solar kheti",
    "panel ke neeche",
    "pannel ke niche",
    "छाया फसल",
    "पैनल के नीचे",
];

const INTENSITY: &[&str] = &[
    "धूप कितनी",
    "धूप घंटे",
    "dhoop kitni",
    "kitni dhup",
    "kitni dhoop",
    "kitna dhup",
    "sun hour",
    "sun hours",
    "psh",
    "peak sun",
    "kitni dhoop chahiye",
    "kitni dhup chahiye",
];

const ROI: &[&str] = &[
    "पेबैक",
    "payback",
    "कितने साल में पैसा वापस",
    "निवेश वापसी",
    "nivesh vapsi",
    "kitne saal",
    "return on investment",
    "roi",
];

const INSTALL_TIME: &[&str] = &[
    "installation se generation",
    "install se generation",
    "lagne me time",
    "lagne me samay",
    "kitna time lagega",
    "kitna samay lagega",
    "kitne din me chalu",
    "kitne din me start",
    "kab se bijli milegi",
    "kab se power milegi",
    "kitne din me generation",
    "install hone me ",
    "स्थापना से बिजली",
    "स्थापना से उत्पादन",
    "कब से चलना शुरू",
    "कब से जनरेशन",
];

const BENEFIT: &[&str] = &[
    "लाभ", "फायदा", "फायदे", "faida", "fayde", "laabh", "labh", "benefit", "profit",
];

const ELIGIBILITY: &[&str] = &[
    "पात्रता",
    "कौन",
    "eligible",
    "eligibility",
    "apply",
    "कौन apply",
    "kon kon",
    "kon kon apply",
];

const SUBSIDY: &[&str] = &[
    "सब्सिडी",
    "subsidy",
    "kitna dena",
    "paisa",
    "payment",
    "cost",
    "kharcha",
    "पैसा",
];

const TENDER: &[&str] = &[
    "tender",
    "टेंडर",
    "tender charge",
    "tender charges",
    "tender fee",
    "tender fees",
    "bidding charge",
    "bid charge",
    "bidding fee",
    "emd",
    "earnest money",
    "earnest money deposit",
    "emd amount",
    "जमानत राशि",
    "ईएमडी",
    "टेंडर फीस",
    "टेंडर शुल्क",
];

const MAINTENANCE: &[&str] = &[
    "रखरखाव",
    "साफ़ सफाई",
    "साफ सफाई",
    "maintenance",
    "rakh rakhav",
    "cleaning",
    "saaf safai",
    "solar kitne saal chalega",
];

const LAND: &[&str] = &[
    "कितनी जमीन",
    "जमीन",
    "भूमि",
    "acre",
    "एकड़",
    "1 मेगावाट",
    "1mw",
    "1 mw",
    "कितनी जमीन चाहिए",
    "जमीन चाहिए",
    "जमीन की आवश्यकता",
    "minimum land",
    "न्यूनतम जमीन",
    "मिनिमम एरिया",
    "कितनी भूमि",
];

const FEEDER: &[&str] = &[
    "फीडर",
    "फीडर स्तर",
    "feeder level",
    "solarisation",
    "solarization",
];

const HOURS: &[&str] = &[
    "घंटे",
    "ghnte",
    "ghante",
    "bijli",
    "kitni der bijli",
    "7 घंटे",
    "बिजली कब",
    "कितनी देर बिजली",
    "kitne ghante",
];

const AGENCY: &[&str] = &[
    "कौन चलाता",
    "kon chalata",
    "konsi agency",
    "क्रियान्वयन",
    "mnre",
    "कौन सी एजेंसी",
    "agency",
];

const WORKING: &[&str] = &[
    "कैसे काम",
    "किस तरह काम",
    "काम करती",
    "kaise kaam",
    "kis tarah kaam",
    "kaam",
    "working",
    "work how",
    "कम्पोनेंट सी",
    "कंपोनेंट सी",
    "कुसुम सी",
    "पीएम कुसुम सी",
    "pm kusum c",
    "component c",
    "pm kusum yojna",
    " yojna",
    "पीएम कुसुम योजना।",
];

const FARMING_EFFECT: &[&str] = &[
    "kheti par kya asar",
    "kheti pe kya asar prega",
    "kheti par asar",
    "fasal par asar",
    "fasal par kya asar",
    "solar lagane se kheti",
    "solar lagane se fasal",
    "solar lagane par kheti",
    "panel ke niche fasal",
    "panel ke neeche fasal",
    "kya kheti band",
    "kheti band ho jayegi",
    "कृषि पर असर",
    "खेती पर असर",
    "खेती पर क्या असर",
    "फसल पर असर",
    "फसल पर क्या असर",
    "सोलर लगाने से खेती",
    "सोलर लगाने से फसल",
    "क्या खेती बंद",
];

const DOS_DONTS: &[&str] = &[
    "do and don't",
    "dos and donts",
    "dos and don'ts",
    "kya dhyan rakhe",
    "kya dhyaan rakhe",
    "kya dhyan rakhna",
    "kya savdhani",
    "kya savdhaani",
    "guideline",
    "guidelines",
    "safety",
    "suraksha",
    "सुरक्षा",
    "सावधानी",
    "क्या ध्यान रखें",
    "क्या-क्या ध्यान रखें",
    "क्या सावधानी",
    "क्या-क्या सावधानी",
    "क्या करें और क्या न करें",
    "क्या करे और क्या न करे",
    "do aur don't",
];

const LOAN: &[&str] = &[
    "bank loan milega",
    "emi kitni",
    "emi kitna",
    "bank paise dega",
    "bank se loan",
    "loan kab milega",
    "bank mana karega",
    "har mahine kitna",
    "loan kaise milega",
    "kitni emi deni",
    "kitni EMI deni",
    "emi",
    "ईएमआइ",
    "bank loan",
    "बैंक लोन",
    "loan",
    "लोन",
    "कितना ईएमआइ",
    "कितनी ईएमआइ",
];

// =============================================================================
// Responses
// =============================================================================

const AGRO_TEXT: &str = "एग्रोवोल्टाइक में सोलर पैनल और खेती साथ-साथ की जाती है। पैनलों के नीचे आमतौर पर छाया सहन करने वाली सब्जियाँ, जड़ी-बूटियाँ या चारा उगाया जा सकता है, यह पैनल की ऊँचाई और पानी की उपलब्धता पर निर्भर करता है।";

const PAYBACK_TEXT: &str = "निवेश पर वापसी (पेबैक) सिस्टम की लागत, सब्सिडी और ऊर्जा बचत पर निर्भर करती है। छोटे सोलर पंप सिस्टम के लिए पैबैक आमतौर पर लगभग 4–8 साल के बीच माना जाता है।";

const SUN_TEXT: &str = "सोलर उत्पादन “पीक सन-घंटों” पर निर्भर करता है। कई जगहों पर आम तौर पर लगभग 4–6 पीक सन घंटे/दिन माने जाते हैं; जितने ज़्यादा पीक सन घंटे, उतनी ज़्यादा बिजली और पंप चलने का समय।";

const HOURS_TEXT: &str = "योजना का उद्देश्य है कि कृषि पंपों को दिन के समय कम से कम लगभग 7 घंटे तक भरोसेमंद बिजली मिले, ताकि किसान आराम से सिंचाई कर सकें और बार-बार कटौती का डर कम हो।";

const HOW_MUCH_LOAN_TEXT: &str = "सब्सिडी के बाद कई मॉडलों में लगभग 5% की रियायती ब्याज पर बैंक लोन मिलता है।\nछोटे सिस्टम के लिए EMI आम तौर पर लगभग ₹2–3 हज़ार प्रति माह हो सकती है (राज्य और बैंक के अनुसार बदल सकती है)।\nआमतौर पर लोन स्वीकृति में लगभग 7–10 दिन लगते हैं।";

const HOW_MUCH_COST_TEXT: &str = "कई राज्यों में लगभग 60% सब्सिडी, लगभग 30% बैंक लोन और करीब 10% किसान अंशदान होता है। कुसुम योजना में सहायता के बाद रूफटॉप सोलर फोटोवोल्टिक सिस्टम लगवाने में लगभग ₹42,000 से ₹49,000 तक का खर्च किसान को करना पड़ सकता है | कुछ राज्यों में PM-KUSUM के तहत फीडर सोलराइजेशन के लिए लगभग 1.5 करोड़ प्रति मेगावाट की सहायता मिलती है  :– लगभग 1.05 करोड़ केंद्र सरकार और करीब 45 लाख राज्य सरकार से। (राज्य व क्षमता के अनुसार राशि बदल सकती है)।";

const HOW_MUCH_LAND_TEXT: &str = "आमतौर पर 1 मेगावाट सौर क्षमता के लिए करीब 4–5 एकड़ ( या 7.251 बीघा/145 कट्ठा) जमीन की आवश्यकता मानी जाती है। यह आंकड़ा प्रोजेक्ट डिजाइन और स्थान के हिसाब से थोड़ा बदल सकता है। ";

const CLARIFY_TEXT: &str = "आप किस बारे में पूछ रहे हैं — लागत (कितना पैसा), धूप घंटे (कितनी धूप), जमीन (कितनी जमीन), पेबैक (कितने साल), या पंप घंटे (कितने घंटे बिजली)?";

const SUBSTATION_TEXT: &str = concat!(
    "कुसुम योजना के तहत **सबस्टेशन 5 किमी के दायरे** में होना चाहिए।\n\n",
    "✔ यदि आपका सबस्टेशन **5 किमी से दूर** है:\n",
    "  • ग्रिड कनेक्शन की **लागत बढ़ सकती है**\n",
    "  • वेंडर/एजेंसी को **अतिरिक्त सर्वे** करना पड़ेगा\n",
    "  • कुछ मामलों में **वैकल्पिक समाधान** संभव है\n\n",
    "✔ समाधान:\n",
    "  1. Google Maps से **नजदीकी सबस्टेशन चेक करें**\n",
    "  2. स्थानीय DISCOM से **दूरी की पुष्टि करें**\n",
    "  3. आवेदन से पहले **साइट सर्वे** कराएं",
);

// The leading Hebrew qof is present in the published answer and is kept as-is.
const SMALL_FARMER_TEXT: &str = concat!(
    "קुसुम योजना सिर्फ बड़े किसानों के लिए नहीं है। छोटे किसान भी आवेदन कर सकते हैं। \n\n",
    "✔ अगर जमीन कम है तो किसान **समूह (FPO, सहकारी समिति, पंचायत समूह)** बनाकर 1 मेगावाट प्लांट के लिए सामूहिक रूप से आवेदन कर सकते हैं। \n",
    "✔ व्यक्तिगत किसान अपनी आवश्यकता के अनुसार **1HP–10HP सोलर पंप** के लिए भी आवेदन कर सकते हैं— इसमें अधिक जमीन की आवश्यकता नहीं होती। \n\n",
    "इसलिए छोटे किसान सीधे, या समूह बनाकर, दोनों तरीकों से योजना का लाभ ले सकते हैं।",
);

const DOCUMENTS_TEXT: &str = concat!(
    "आवेदन के लिए आमतौर पर निम्न दस्तावेज़ों की जरूरत होती है:\n\n",
    "✔ आधार कार्ड\n",
    "✔ बैंक पासबुक\n",
    "✔ भूमि के कागज़ (खसरा/खतौनी/रजिस्ट्री)\n",
    "✔ बिजली कनेक्शन/बिल की कॉपी\n",
    "✔ पैन कार्ड\n",
    "✔ मोबाइल नंबर / टेलीफोन नंबर\n",
    "✔ ईमेल आईडी\n",
    "✔ डिजिटल सिग्नेचर (DSC) — eMudhra जैसी सेवाओं से बनवाया जा सकता है\n\n",
    "ध्यान दें: कुछ राज्यों में अतिरिक्त दस्तावेज़ या सत्यापन की आवश्यकता हो सकती है।",
);

const INSTALL_TIME_TEXT: &str = concat!(
    "स्थापना से बिजली उत्पादन शुरू होने तक का सामान्य समय लगभग इस प्रकार हो सकता है:\n\n",
    "• साइट सर्वे और वेंडर आवंटन: 7–15 दिन\n",
    "• इंस्टॉलेशन: 15–25 दिन\n",
    "• परीक्षण और अनुमोदन: 5–7 दिन\n\n",
    "कुल मिलाकर आम तौर पर लगभग 1–2 महीने लग सकते हैं (राज्य, वेंडर और साइट की स्थिति पर निर्भर).",
);

const BENEFITS_TEXT: &str = "कुसुम योजना से आपको सस्ती बिजली, डीज़ल की बचत और अतिरिक्त आमदनी (सोलर से बेची गई बिजली) मिल सकती है। किसानों की आय में वृद्धि, ऊर्जा लागत में कमी और पर्यावरण प्रदूषण भी घटता है।";

const ELIGIBILITY_TEXT: &str = concat!(
    "आमतौर पर सभी किसान (व्यक्ति या समूह), सहकारी समितियाँ, पंचायतें और किसान उत्पादक संगठन कुसुम योजना में शामिल हो सकते हैं। अंतिम नियम राज्य की गाइडलाइन पर निर्भर करते हैं। ",
    "किसान अपनी आवश्यकता के अनुसार 1 एचपी से 10 एचपी तक के सोलर वाटर पंप के लिए ऑनलाइन आवेदन कर सकते हैं, ",
    "और जिन किसानों के पास खुद की जमीन है या पट्टे पर जमीन है, वे भी आवेदन कर सकते हैं।\n\n",
    " आवेदन प्रक्रिया में कई राज्यों में **डिजिटल सिग्नेचर (DSC)** की आवश्यकता होती है, ",
    "जो **eMudhra** जैसी अधिकृत वेबसाइट से बनवाया जा सकता है:\n",
    "https://www.emudhra.com",
);

const SUBSIDY_TEXT: &str = "कई राज्यों में लगभग 60% सब्सिडी, लगभग 30% बैंक लोन और करीब 10% किसान अंशदान होता है। कुछ राज्यों में PM-KUSUM के तहत फीडर सोलराइजेशन के लिए लगभग 1.5 करोड़ प्रति मेगावाट की सहायता मिलती है  :– लगभग 1.05 करोड़ केंद्र सरकार और करीब 45 लाख राज्य सरकार से। वास्तविक राशि आपके राज्य की  नीति और टेंडर पर निर्भर करती है।";

const TENDER_TEXT: &str = concat!(
    "टेंडर या शुल्क (संकेतात्मक उदाहरण):\n\n",
    "• रेफरेंस डॉक्यूमेंट चार्ज: लगभग ₹590\n",
    "• बिडिंग या भागीदारी शुल्क: लगभग ₹23,600\n",
    "• EMD (Earnest Money Deposit) या जमानत राशि: लगभग ₹1,00,000\n\n",
    "वास्तविक राशि राज्य, DISCOM और विशेष टेंडर दस्तावेज़ पर निर्भर करती है, इसलिए हमेशा नवीनतम आधिकारिक टेंडर नोटिस देखें।",
);

const MAINTENANCE_TEXT: &str = "सोलर पैनल आम तौर पर 20–25 साल तक चल सकते हैं, और इनका रखरखाव बहुत कम होता है। बस समय-समय पर सफाई और हल्की जाँच करते रहना होता है।";

const LAND_TEXT: &str = "आमतौर पर 1 मेगावाट सौर क्षमता के लिए करीब 4–5 एकड़ जमीन की आवश्यकता मानी जाती है। यह आंकड़ा प्रोजेक्ट डिजाइन और स्थान के हिसाब से थोड़ा बदल सकता है।";

const FEEDER_TEXT: &str = "फीडर स्तर सौरिकीकरण में कृषि फीडर के पास एक बड़ा सोलर प्लांट लगाया जाता है, जो पूरे फीडर को दिन में सौर बिजली देता है। दूसरा तरीका यह है कि हर किसान के पंप पर अलग-अलग सोलर सिस्टम लगाया जाए, जिससे वह अपनी सिंचाई खुद की सौर बिजली से कर सके।";

const AGENCY_TEXT: &str = "पीएम-कुसुम योजना नवीन और नवीकरणीय ऊर्जा मंत्रालय (MNRE) द्वारा चलाई जाती है। इसके क्रियान्वयन में राज्य की एजेंसियाँ और बिजली वितरण कंपनियाँ (DISCOM) मिलकर काम करती हैं।";

const WORKING_TEXT: &str = "PM-KUSUM का Component-C मुख्य रूप से ग्रिड-कनेक्टेड कृषि पंपों को सौर ऊर्जा से चलाने  के लिए है | इस योजना में किसानों के ग्रिड-कनेक्टेड पंपों पर सोलर सिस्टम लगाए जाते हैं। इससे पंप चलाने के लिए खुद की सौर बिजली बनती है, ग्रिड पर निर्भरता और बिल दोनों कम होते हैं और स्वच्छ ऊर्जा उत्पादन बढ़ता है और अतिरिक्त बिजली ग्रिड को बेचकर कमाई भी कर सकते हैं,।";

const FARMING_EFFECT_TEXT: &str = concat!(
    "सोलर लगने से खेती बंद नहीं होती, बल्कि सही डिज़ाइन पर दोनों साथ-साथ चल सकते हैं:\n\n",
    " फायदे:\n",
    "• पैनल की छाया से कुछ फसलें तेज़ गर्मी और लू से बच जाती हैं।\n",
    "• मिट्टी की नमी कुछ समय तक बनी रह सकती है, जिससे सिंचाई की जरूरत थोड़ा कम हो सकती है।\n",
    "• चारा, सब्ज़ियाँ, और कुछ दालें जैसी छाया सहन करने वाली फसलें पैनल के नीचे अच्छी चल सकती हैं।\n\n",
    " ध्यान रखने वाली बातें:\n",
    "• जो फसलें पूरी धूप मांगती हैं, उन्हें पैनल के नीचे लगाने से उत्पादन कम हो सकता है।\n",
    "• ट्रैक्टर और मशीनरी के लिए पैनलों की ऊँचाई और लाइन के बीच दूरी सही रखना जरूरी है।\n",
    "• अक्सर ड्रिप सिंचाई या पाइप लाइन बेहतर रहती है, ताकि पानी से इलेक्ट्रिकल पार्ट्स गीले न हों।\n\n",
    "सही फसल-चयन और लेआउट से किसान बिजली और फसल दोनों का फायदा ले सकते हैं।",
);

const DOS_DONTS_TEXT: &str = concat!(
    " क्या करें (DOs):\n",
    "• पैनलों के बीच पर्याप्त रास्ता रखें, ताकि किसान और ट्रैक्टर/बैलगाड़ी आसानी से आ-जा सकें।\n",
    "• पैनल और तारों की नियमित सफाई और जांच कराते रहें।\n",
    "• सभी कनेक्शन और वायरिंग हमेशा क्वालिफाइड इलेक्ट्रीशियन से ही कराएँ।\n",
    "• पैनलों के नीचे नीची या मध्यम ऊँचाई वाली फसलें चुनें, जो छाया सहन कर सकें।\n",
    "• तेज़ आंधी, ओलावृष्टि या भारी बरसात के बाद स्ट्रक्चर और फाउंडेशन की जांच करें।\n\n",
    " क्या न करें (DON'Ts):\n",
    "• बहुत ऊँचे पेड़ या फसल पैनलों के बिलकुल पास न लगाएँ, जिससे छाया और पत्तों की गंदगी बढ़े।\n",
    "• पैनलों के नीचे या पास में खुले तार या ढीले कनेक्शन न छोड़ें।\n",
    "• स्ट्रक्चर पर अनावश्यक अतिरिक्त वजन (अन्य सामान, अस्थायी छत आदि) न रखें।\n",
    "• बिना सुरक्षा के खुद से इलेक्ट्रिकल पैनल खोलने की कोशिश न करें।\n\n",
    "इन बातों का ध्यान रखकर आप सिस्टम की उम्र बढ़ा सकते हैं, खेती सुरक्षित रख सकते हैं और खराबी की संभावना कम कर सकते हैं।",
);

const LOAN_TEXT: &str = "सब्सिडी के बाद लोन लगभग 5% ब्याज पर मिलता है। EMI लगभग ₹2–3 हज़ार/माह हो सकती है और आमतौर पर 7–10 दिनों में स्वीकृति मिल जाती है (राज्य व बैंक के अनुसार बदल सकता है)।";

const FALLBACK_TEXT: &str = "आप लाभ, पात्रता, दस्तावेज़, सब्सिडी, रखरखाव, 1 मेगावाट के लिए जमीन, फीडर स्तर सौरिकीकरण, सोलर खेती, धूप घंटे, पेबैक या योजना कैसे काम करती है – इन सब के बारे में पूछ सकते हैं।";

const COPY: LocaleCopy = LocaleCopy {
    heading: "कुसुम सारथी",
    greeting: "नमस्ते किसान मित्र! कुसुम योजना के बारे में क्या जानना चाहते हैं?        आप पूछने के लिए वॉयस असिस्टेंट का भी उपयोग कर सकते हैं |!",
    placeholder: "अपना सवाल यहाँ लिखें... (जैसे: लाभ, कागज़, सब्सिडी, सोलर खेती, धूप घंटे)",
    voice_unavailable: "इस डिवाइस पर वॉयस इनपुट उपलब्ध नहीं है।",
    muted: "ध्वनि बंद",
    unmuted: "ध्वनि चालू",
    start_voice: "वॉयस शुरू करें",
    stop_voice: "रिकॉर्डिंग बंद करें",
};

// =============================================================================
// Table
// =============================================================================

/// "chhote"/"chote" anywhere together with "kisan"/"kisaan" anywhere.
fn small_farmer() -> Predicate {
    let kisan = || Predicate::any(&["kisan", "kisaan"]);
    Predicate::Either(vec![
        Predicate::any(SMALL_FARMER),
        Predicate::All(vec![Predicate::any(&["chhote"]), kisan()]),
        Predicate::All(vec![Predicate::any(&["chote"]), kisan()]),
    ])
}

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
    let rules = vec![
        Rule::text(
            Topic::HowMuchAgrovoltaics,
            Predicate::All(vec![Predicate::any(KITNA), Predicate::any(AGRO_KITNA)]),
            AGRO_TEXT,
        ),
        Rule::dispatch(Topic::HowMuch, Predicate::any(KITNA), how_much()),
        Rule::text(
            Topic::Substation,
            Predicate::any(SUBSTATION),
            SUBSTATION_TEXT,
        ),
        Rule::text(Topic::SmallFarmer, small_farmer(), SMALL_FARMER_TEXT),
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
    RuleTable::new(Locale::Hi, rules, FALLBACK_TEXT, COPY)
}
