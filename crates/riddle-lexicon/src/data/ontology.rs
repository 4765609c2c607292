/// Part-of edges: a whole followed by its components.
pub static PART_OF: &[(&str, &[&str])] = &[
    ("body", &["head", "hand", "arm", "leg", "foot", "eye", "heart", "neck"]),
    ("hand", &["finger", "thumb", "palm"]),
    ("foot", &["toe", "heel"]),
    ("head", &["face", "eye", "ear", "mouth", "hair"]),
    ("house", &["room", "door", "window", "roof", "wall", "floor", "stairs"]),
    ("room", &["door", "window", "wall", "floor", "ceiling"]),
    ("car", &["wheel", "engine", "seat", "trunk", "windshield"]),
    ("ship", &["deck", "mast", "cabin", "anchor"]),
    ("tree", &["branch", "leaf", "root", "trunk"]),
    ("gun", &["bullet", "trigger", "barrel"]),
    ("몸", &["머리", "손", "팔", "다리", "발", "눈", "목"]),
    ("손", &["손가락"]),
    ("집", &["방", "문", "창문", "지붕"]),
    ("방", &["문", "창문", "바닥", "벽"]),
    ("자동차", &["바퀴", "엔진", "트렁크"]),
];
