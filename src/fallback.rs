//! Built-in word list used when no dictionary file can be read.
//!
//! Small on purpose: it only guarantees the service always has something to
//! answer with. A store built from it carries `Provenance::Fallback`.

pub const FALLBACK_WORDS: [&str; 461] = [
    "the", "be", "to", "of", "and", "in", "have", "it", "for", "not", "with", "he", "as", "you",
    "do", "at", "this", "but", "his", "by", "from", "they", "she", "or", "an", "will", "my",
    "one", "all", "would", "there", "their", "what", "so", "up", "out", "if", "about", "who",
    "get", "which", "go", "me", "when", "make", "can", "like", "time", "no", "just", "him",
    "know", "take", "people", "into", "year", "your", "good", "some", "could", "them", "see",
    "other", "than", "then", "now", "look", "only", "come", "its", "over", "think", "also",
    "back", "after", "use", "two", "how", "our", "work", "first", "well", "way", "even", "new",
    "want", "because", "any", "these", "give", "day", "most", "us", "cat", "dog", "run", "sun",
    "fun", "gun", "cut", "put", "set", "let", "net", "pet", "wet", "yet", "met", "bet", "eat",
    "hat", "bat", "rat", "fat", "sat", "mat", "pat", "bad", "sad", "mad", "had", "bag", "tag",
    "lag", "rag", "big", "dig", "fig", "pig", "wig", "hot", "pot", "lot", "got", "top", "pop",
    "hop", "cop", "red", "bed", "led", "fed", "ten", "pen", "hen", "men", "den", "yes", "bus",
    "box", "fox", "six", "mix", "fix", "zip", "tip", "lip", "hip", "dip", "cup", "pup", "act",
    "ace", "age", "ago", "aid", "aim", "air", "art", "ask", "ate", "arm", "bar", "bee", "bit",
    "boy", "bow", "car", "cab", "cow", "cry", "ear", "egg", "end", "era", "far", "few", "fly",
    "gas", "hit", "ice", "ill", "key", "kid", "law", "lay", "leg", "lie", "low", "map", "may",
    "mud", "nor", "oak", "odd", "oil", "old", "own", "pan", "pay", "pie", "raw", "row", "sea",
    "sit", "ski", "sky", "spa", "tea", "tie", "toe", "ton", "toy", "van", "war", "web", "win",
    "won", "yard", "able", "ache", "area", "away", "baby", "ball", "band", "bank", "base",
    "bath", "bear", "beat", "bird", "blue", "boat", "body", "bone", "book", "born", "both",
    "cake", "call", "calm", "card", "care", "cash", "city", "cold", "cool", "core", "cost",
    "dark", "data", "date", "dead", "deal", "dear", "deep", "door", "down", "draw", "each",
    "east", "easy", "edge", "else", "face", "fact", "fair", "fall", "farm", "fast", "fear",
    "feel", "file", "fill", "find", "fine", "fire", "fish", "five", "food", "foot", "form",
    "four", "free", "full", "game", "gate", "gift", "girl", "glad", "goal", "gold", "gone",
    "grid", "grin", "gird", "hair", "half", "hall", "hand", "hard", "head", "hear", "heat",
    "help", "here", "high", "hill", "hold", "home", "hope", "idea", "iron", "item", "keep",
    "kind", "king", "lake", "land", "last", "late", "lead", "life", "line", "list", "long",
    "lost", "love", "main", "many", "mark", "meal", "meet", "mind", "miss", "moon", "more",
    "move", "much", "must", "name", "near", "need", "nice", "note", "once", "open", "page",
    "pain", "pair", "park", "part", "pass", "past", "path", "pick", "plan", "play", "poor",
    "rain", "read", "real", "rest", "rich", "ride", "ring", "rise", "road", "rock", "role",
    "room", "rule", "safe", "salt", "same", "sand", "save", "seat", "seed", "ship", "shop",
    "side", "sign", "site", "size", "skin", "slow", "snow", "soft", "soil", "song", "soon",
    "sort", "star", "stay", "step", "stop", "such", "sure", "tail", "talk", "tall", "team",
    "tell", "test", "text", "tree", "true", "turn", "unit", "very", "wait", "walk", "wall",
    "warm", "wash", "wave", "week", "west", "wide", "wife", "wild", "wind", "wine", "wing",
    "wise", "wish", "wood", "word", "zone", "beach", "drink", "grind", "heart", "earth",
    "tears", "stare", "rates", "silent", "listen", "enlist", "tinsel", "inlets", "stone",
    "notes", "onset", "tones", "angel", "angle", "glean",
];
