/// Groups of mutually substitutable words. Every member maps to every other.
pub static SYNONYM_GROUPS: &[&[&str]] = &[
    // death and killing
    &["dead", "died", "death", "deceased", "lifeless"],
    &["die", "dies", "dying", "perish"],
    &["kill", "killed", "killing", "slay", "slain"],
    &["murder", "murdered", "murderer", "homicide"],
    &["corpse", "body", "remains", "cadaver"],
    &["suicide", "self-inflicted"],
    &["hang", "hanged", "hanging", "hung", "noose"],
    &["drown", "drowned", "drowning"],
    &["poison", "poisoned", "toxic", "venom"],
    &["shot", "shoot", "shooting", "fired"],
    &["stab", "stabbed", "stabbing"],
    // matter and state
    &["melt", "melted", "melting", "thawed", "thaw"],
    &["water", "liquid"],
    &["puddle", "pool"],
    &["ice", "icicle"],
    &["broken", "broke", "smashed", "shattered", "damaged"],
    &["fire", "flame", "blaze", "burning"],
    // movement and posture
    &["stand", "stood", "standing"],
    &["step", "stepped", "climb", "climbed"],
    &["fall", "fell", "fallen", "falling", "drop", "dropped"],
    &["jump", "jumped", "leap", "leapt"],
    &["escape", "escaped", "flee", "fled"],
    &["leave", "left", "exit", "exited"],
    &["enter", "entered", "came"],
    // everyday actions
    &["eat", "ate", "eaten", "eating", "meal"],
    &["drink", "drank", "drinking", "drunk"],
    &["see", "saw", "seen", "look", "looked", "watch", "watched"],
    &["sleep", "slept", "asleep", "sleeping"],
    &["call", "called", "phone", "telephone"],
    &["lie", "lied", "lying", "deceive"],
    // things and places
    &["weapon", "arms"],
    &["gun", "firearm"],
    &["knife", "blade"],
    &["chair", "stool", "seat"],
    &["room", "chamber"],
    &["house", "home"],
    &["car", "automobile"],
    &["boat", "vessel"],
    &["rope", "cord"],
    &["block", "cube", "chunk"],
    &["money", "cash"],
    &["door", "doorway"],
    // people
    &["man", "guy", "gentleman"],
    &["woman", "lady"],
    &["child", "kid"],
    &["police", "cop", "officer", "detective"],
    &["doctor", "physician"],
    &["wife", "spouse"],
    &["accident", "accidental", "accidentally", "mishap"],
    &["blind", "sightless"],
    // Korean
    &["죽", "사망", "숨지", "죽음"],
    &["죽이", "살해", "살인"],
    &["시체", "시신"],
    &["자살", "목숨을 끊"],
    &["녹", "해동"],
    &["물", "액체"],
    &["얼음", "빙판"],
    &["의자", "걸상"],
    &["무기", "흉기"],
    &["총", "권총"],
    &["칼", "나이프"],
    &["남자", "남성", "사내"],
    &["여자", "여성"],
    &["아이", "어린이", "아기"],
    &["경찰", "형사"],
    &["사고", "실수"],
    &["독", "독약"],
    &["떨어지", "추락"],
    &["먹", "식사"],
    &["도망", "탈출"],
];
