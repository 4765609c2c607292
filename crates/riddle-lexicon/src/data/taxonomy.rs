/// Is-a edges: hypernym followed by its direct hyponyms.
pub static TAXONOMY: &[(&str, &[&str])] = &[
    ("person", &["man", "woman", "child", "boy", "girl", "husband", "wife", "father", "mother", "son", "daughter", "doctor", "police", "driver", "pilot", "stranger", "friend"]),
    ("weapon", &["gun", "knife", "sword", "bomb", "axe", "arrow", "poison"]),
    ("gun", &["pistol", "rifle", "shotgun", "revolver"]),
    ("animal", &["dog", "cat", "horse", "bird", "fish", "snake", "shark", "bear", "cow", "pig"]),
    ("bird", &["parrot", "crow", "pigeon", "eagle"]),
    ("fish", &["shark", "salmon", "tuna"]),
    ("vehicle", &["car", "boat", "train", "plane", "bicycle", "truck", "bus", "ship"]),
    ("food", &["bread", "meat", "apple", "soup", "rice", "cake", "sandwich", "egg"]),
    ("drink", &["wine", "coffee", "tea", "milk", "beer", "juice"]),
    ("liquid", &["water", "blood", "wine", "oil", "milk"]),
    ("container", &["box", "bottle", "bag", "cup", "barrel", "suitcase"]),
    ("furniture", &["chair", "table", "bed", "sofa", "desk", "wardrobe"]),
    ("building", &["house", "hotel", "hospital", "church", "school", "tower", "prison"]),
    ("tool", &["hammer", "saw", "ladder", "shovel", "rope"]),
    ("weather", &["rain", "snow", "storm", "fog", "wind"]),
    ("sport", &["golf", "tennis", "football", "boxing", "swimming"]),
    ("사람", &["남자", "여자", "아이", "남편", "아내", "의사", "경찰", "친구"]),
    ("무기", &["총", "칼", "독", "폭탄", "도끼"]),
    ("동물", &["개", "고양이", "새", "물고기", "상어", "뱀"]),
    ("탈것", &["자동차", "배", "기차", "비행기", "자전거"]),
    ("음식", &["빵", "고기", "밥", "사과", "국"]),
    ("가구", &["의자", "책상", "침대", "소파"]),
    ("건물", &["집", "호텔", "병원", "학교", "감옥"]),
];
