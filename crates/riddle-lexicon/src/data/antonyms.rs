/// Word-level antonym pairs for direct token lookup. Symmetric on load.
pub static ANTONYM_PAIRS: &[(&str, &[&str])] = &[
    ("alive", &["dead", "died", "deceased"]),
    ("live", &["die", "died"]),
    ("living", &["dead", "deceased"]),
    ("survived", &["died", "perished"]),
    ("open", &["closed", "locked", "shut"]),
    ("opened", &["closed", "locked"]),
    ("unlocked", &["locked"]),
    ("full", &["empty"]),
    ("inside", &["outside"]),
    ("indoors", &["outdoors"]),
    ("hot", &["cold"]),
    ("warm", &["cool", "cold"]),
    ("wet", &["dry"]),
    ("light", &["dark"]),
    ("day", &["night"]),
    ("true", &["false"]),
    ("truth", &["lie"]),
    ("win", &["lose", "lost"]),
    ("won", &["lost"]),
    ("enter", &["exit", "leave"]),
    ("arrive", &["depart", "leave"]),
    ("early", &["late"]),
    ("same", &["different"]),
    ("present", &["absent"]),
    ("found", &["lost", "missing"]),
    ("suicide", &["murder", "murdered", "homicide"]),
    ("accident", &["intentional", "deliberate", "planned"]),
    ("accidentally", &["deliberately", "intentionally"]),
    ("alone", &["together"]),
    ("young", &["old"]),
    ("awake", &["asleep"]),
    ("male", &["female"]),
    ("man", &["woman"]),
    ("husband", &["wife"]),
    ("before", &["after"]),
    ("살", &["죽"]),
    ("생존", &["사망"]),
    ("열", &["닫", "잠"]),
    ("있", &["없"]),
    ("안", &["밖"]),
    ("낮", &["밤"]),
    ("진실", &["거짓"]),
    ("자살", &["살인", "타살"]),
    ("사고", &["고의"]),
    ("남자", &["여자"]),
];

/// Definition of a labeled antonym axis.
pub struct AxisDef {
    pub label: &'static str,
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
    /// Bare existential phrasing ("is there ...") fires too easily; require a
    /// concrete target noun on one side before trusting this axis.
    pub requires_target: bool,
}

/// Labeled opposite vocabularies. An axis is active for a puzzle only when
/// both poles appear somewhere in its narrative or truth.
pub static ANTONYM_AXES: &[AxisDef] = &[
    AxisDef {
        label: "alive/dead",
        positive: &["alive", "living", "survived", "survive", "breathing", "살아", "생존"],
        negative: &["dead", "died", "die", "death", "corpse", "deceased", "죽", "사망", "시체"],
        requires_target: false,
    },
    AxisDef {
        label: "open/closed",
        positive: &["open", "opened", "unlocked", "ajar", "열려", "열린"],
        negative: &["closed", "locked", "shut", "sealed", "잠긴", "닫힌", "잠겨"],
        requires_target: false,
    },
    AxisDef {
        label: "exist/not-exist",
        positive: &["exist", "exists", "existed", "present", "있"],
        negative: &["none", "nothing", "absent", "missing", "empty", "없"],
        requires_target: true,
    },
    AxisDef {
        label: "inside/outside",
        positive: &["inside", "indoors", "within", "안에", "실내"],
        negative: &["outside", "outdoors", "밖", "실외"],
        requires_target: false,
    },
    AxisDef {
        label: "self/other",
        positive: &["himself", "herself", "themselves", "suicide", "자살", "스스로"],
        negative: &["murder", "murdered", "murderer", "killer", "someone else", "살인", "살해", "타살"],
        requires_target: false,
    },
    AxisDef {
        label: "intentional/accidental",
        positive: &["intentional", "intentionally", "deliberately", "deliberate", "planned", "on purpose", "일부러", "고의"],
        negative: &["accident", "accidental", "accidentally", "mistake", "unintentional", "실수", "사고"],
        requires_target: false,
    },
    AxisDef {
        label: "male/female",
        positive: &["man", "male", "boy", "husband", "father", "남자", "남성"],
        negative: &["woman", "female", "girl", "wife", "mother", "여자", "여성"],
        requires_target: false,
    },
    AxisDef {
        label: "day/night",
        positive: &["day", "daytime", "noon", "afternoon", "낮"],
        negative: &["night", "nighttime", "midnight", "밤"],
        requires_target: false,
    },
    AxisDef {
        label: "hot/cold",
        positive: &["hot", "warm", "heat", "heated", "뜨거", "더운"],
        negative: &["cold", "cool", "frozen", "freezing", "차가", "추운"],
        requires_target: false,
    },
    AxisDef {
        label: "true/false",
        positive: &["true", "truth", "honest", "real", "진실", "사실"],
        negative: &["false", "lie", "lied", "lying", "fake", "거짓", "가짜"],
        requires_target: false,
    },
    AxisDef {
        label: "young/old",
        positive: &["young", "child", "kid", "baby", "어린", "아이"],
        negative: &["old", "elderly", "aged", "늙은", "노인"],
        requires_target: false,
    },
];
