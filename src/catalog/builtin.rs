//! Compiled-in country list: ISO 3166-1 numeric id, Natural Earth 110m display
//! name, alpha-2 code. Territories without a numeric code in the atlas
//! (Kosovo, N. Cyprus, Somaliland) are absent.

pub(super) const COUNTRIES: &[(i64, &str, &str)] = &[
    (4, "Afghanistan", "AF"),
    (8, "Albania", "AL"),
    (12, "Algeria", "DZ"),
    (24, "Angola", "AO"),
    (10, "Antarctica", "AQ"),
    (32, "Argentina", "AR"),
    (51, "Armenia", "AM"),
    (36, "Australia", "AU"),
    (40, "Austria", "AT"),
    (31, "Azerbaijan", "AZ"),
    (44, "Bahamas", "BS"),
    (50, "Bangladesh", "BD"),
    (112, "Belarus", "BY"),
    (56, "Belgium", "BE"),
    (84, "Belize", "BZ"),
    (204, "Benin", "BJ"),
    (64, "Bhutan", "BT"),
    (68, "Bolivia", "BO"),
    (70, "Bosnia and Herz.", "BA"),
    (72, "Botswana", "BW"),
    (76, "Brazil", "BR"),
    (96, "Brunei", "BN"),
    (100, "Bulgaria", "BG"),
    (854, "Burkina Faso", "BF"),
    (108, "Burundi", "BI"),
    (116, "Cambodia", "KH"),
    (120, "Cameroon", "CM"),
    (124, "Canada", "CA"),
    (140, "Central African Rep.", "CF"),
    (148, "Chad", "TD"),
    (152, "Chile", "CL"),
    (156, "China", "CN"),
    (170, "Colombia", "CO"),
    (178, "Congo", "CG"),
    (188, "Costa Rica", "CR"),
    (384, "Côte d'Ivoire", "CI"),
    (191, "Croatia", "HR"),
    (192, "Cuba", "CU"),
    (196, "Cyprus", "CY"),
    (203, "Czechia", "CZ"),
    (180, "Dem. Rep. Congo", "CD"),
    (208, "Denmark", "DK"),
    (262, "Djibouti", "DJ"),
    (214, "Dominican Rep.", "DO"),
    (218, "Ecuador", "EC"),
    (818, "Egypt", "EG"),
    (222, "El Salvador", "SV"),
    (226, "Eq. Guinea", "GQ"),
    (232, "Eritrea", "ER"),
    (233, "Estonia", "EE"),
    (748, "eSwatini", "SZ"),
    (231, "Ethiopia", "ET"),
    (238, "Falkland Is.", "FK"),
    (242, "Fiji", "FJ"),
    (246, "Finland", "FI"),
    (250, "France", "FR"),
    (260, "Fr. S. Antarctic Lands", "TF"),
    (266, "Gabon", "GA"),
    (270, "Gambia", "GM"),
    (268, "Georgia", "GE"),
    (276, "Germany", "DE"),
    (288, "Ghana", "GH"),
    (300, "Greece", "GR"),
    (304, "Greenland", "GL"),
    (320, "Guatemala", "GT"),
    (324, "Guinea", "GN"),
    (624, "Guinea-Bissau", "GW"),
    (328, "Guyana", "GY"),
    (332, "Haiti", "HT"),
    (340, "Honduras", "HN"),
    (348, "Hungary", "HU"),
    (352, "Iceland", "IS"),
    (356, "India", "IN"),
    (360, "Indonesia", "ID"),
    (364, "Iran", "IR"),
    (368, "Iraq", "IQ"),
    (372, "Ireland", "IE"),
    (376, "Israel", "IL"),
    (380, "Italy", "IT"),
    (388, "Jamaica", "JM"),
    (392, "Japan", "JP"),
    (400, "Jordan", "JO"),
    (398, "Kazakhstan", "KZ"),
    (404, "Kenya", "KE"),
    (414, "Kuwait", "KW"),
    (417, "Kyrgyzstan", "KG"),
    (418, "Laos", "LA"),
    (428, "Latvia", "LV"),
    (422, "Lebanon", "LB"),
    (426, "Lesotho", "LS"),
    (430, "Liberia", "LR"),
    (434, "Libya", "LY"),
    (440, "Lithuania", "LT"),
    (442, "Luxembourg", "LU"),
    (807, "Macedonia", "MK"),
    (450, "Madagascar", "MG"),
    (454, "Malawi", "MW"),
    (458, "Malaysia", "MY"),
    (466, "Mali", "ML"),
    (478, "Mauritania", "MR"),
    (484, "Mexico", "MX"),
    (498, "Moldova", "MD"),
    (496, "Mongolia", "MN"),
    (499, "Montenegro", "ME"),
    (504, "Morocco", "MA"),
    (508, "Mozambique", "MZ"),
    (104, "Myanmar", "MM"),
    (516, "Namibia", "NA"),
    (524, "Nepal", "NP"),
    (528, "Netherlands", "NL"),
    (540, "New Caledonia", "NC"),
    (554, "New Zealand", "NZ"),
    (558, "Nicaragua", "NI"),
    (562, "Niger", "NE"),
    (566, "Nigeria", "NG"),
    (408, "North Korea", "KP"),
    (578, "Norway", "NO"),
    (512, "Oman", "OM"),
    (586, "Pakistan", "PK"),
    (275, "Palestine", "PS"),
    (591, "Panama", "PA"),
    (598, "Papua New Guinea", "PG"),
    (600, "Paraguay", "PY"),
    (604, "Peru", "PE"),
    (608, "Philippines", "PH"),
    (616, "Poland", "PL"),
    (620, "Portugal", "PT"),
    (630, "Puerto Rico", "PR"),
    (634, "Qatar", "QA"),
    (642, "Romania", "RO"),
    (643, "Russia", "RU"),
    (646, "Rwanda", "RW"),
    (728, "S. Sudan", "SS"),
    (682, "Saudi Arabia", "SA"),
    (686, "Senegal", "SN"),
    (688, "Serbia", "RS"),
    (694, "Sierra Leone", "SL"),
    (703, "Slovakia", "SK"),
    (705, "Slovenia", "SI"),
    (90, "Solomon Is.", "SB"),
    (706, "Somalia", "SO"),
    (710, "South Africa", "ZA"),
    (410, "South Korea", "KR"),
    (724, "Spain", "ES"),
    (144, "Sri Lanka", "LK"),
    (729, "Sudan", "SD"),
    (740, "Suriname", "SR"),
    (752, "Sweden", "SE"),
    (756, "Switzerland", "CH"),
    (760, "Syria", "SY"),
    (158, "Taiwan", "TW"),
    (762, "Tajikistan", "TJ"),
    (834, "Tanzania", "TZ"),
    (764, "Thailand", "TH"),
    (626, "Timor-Leste", "TL"),
    (768, "Togo", "TG"),
    (780, "Trinidad and Tobago", "TT"),
    (788, "Tunisia", "TN"),
    (792, "Turkey", "TR"),
    (795, "Turkmenistan", "TM"),
    (800, "Uganda", "UG"),
    (804, "Ukraine", "UA"),
    (784, "United Arab Emirates", "AE"),
    (826, "United Kingdom", "GB"),
    (840, "United States of America", "US"),
    (858, "Uruguay", "UY"),
    (860, "Uzbekistan", "UZ"),
    (548, "Vanuatu", "VU"),
    (862, "Venezuela", "VE"),
    (704, "Vietnam", "VN"),
    (732, "W. Sahara", "EH"),
    (887, "Yemen", "YE"),
    (894, "Zambia", "ZM"),
    (716, "Zimbabwe", "ZW"),
];

/// Alpha-2 code for an ISO numeric id, when the id is in the table.
pub(super) fn alpha2_for_numeric(id: i64) -> Option<&'static str> {
    COUNTRIES
        .iter()
        .find(|(numeric, _, _)| *numeric == id)
        .map(|(_, _, alpha2)| *alpha2)
}
