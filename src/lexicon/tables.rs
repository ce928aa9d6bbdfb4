//! Builtin heuristic tables (Indonesian + English slang).
//!
//! Entries are lowercase; substring tables are matched against lowercased
//! normalized text. Regex patterns are anchored so they only reject
//! whole-comment boilerplate.

pub(super) const BUILTIN_VERSION: u32 = 1;

pub(super) const POSITIVE_INDICATORS: &[&str] = &[
    // General agreement / praise
    "bagus",
    "baik",
    "benar",
    "setuju",
    "mantap",
    "keren",
    "hebat",
    "luar biasa",
    "wow",
    "keren banget",
    "mantul",
    "top",
    "oke",
    "ok",
    "sip",
    "jos",
    "gaskeun",
    "yes",
    "betul",
    "bener",
    "jujur",
    "asli",
    "terpercaya",
    // Thanks / gratitude
    "terima kasih",
    "makasih",
    "thanks",
    "thank you",
    "terimakasih banyak",
    "alhamdulillah",
    "syukur",
    "puji syukur",
    // Positive emotion
    "senang",
    "gembira",
    "bahagia",
    "suka",
    "love",
    "happy",
    "enjoy",
    "terharu",
    "tersentuh",
    "semangat",
    "antusias",
    "terinspirasi",
    "respect",
    // Compliments
    "cantik",
    "tampan",
    "ganteng",
    "beautiful",
    "handsome",
    "cakep",
    "bagus banget",
    "super",
    "amazing",
    "perfect",
    "excellent",
    "terbaik",
    "very good",
    "recommended",
    "worth it",
    "bermanfaat",
    "menginspirasi",
    "edukatif",
    "informatif",
    "berguna",
    "top markotop",
    "masyaallah",
    "subhanallah",
    // Positive slang
    "kereeen",
    "mantaaap",
    "sipp",
    "asli keren",
    "goks",
    "pecah",
    "epic",
    "gila keren",
    "niat banget",
    "niat bgt",
    "nice one",
    "solid",
    "dahsyat",
    "gg",
    "op banget",
    "worth banget",
    // Misc
    "like",
    "favorit",
    "best",
    "bagus lah",
    "bagus sih",
    "positif banget",
    "powerful",
    "terdepan",
    "recommended banget",
    "paling keren",
    "paling bagus",
];

pub(super) const BOILERPLATE_PATTERNS: &[&str] = &[
    r"^(ya|iya|yah|yoi|sip|ok+|oke+|baik+|yap+|yes+|no+|nggak+|tidak+)$",
    r"^(wah+|wow+|wooow+|hebat+|mantap+|keren+|bagus+|top+|jos+|asik+|sip+)$",
    r"^(haha+|hihi+|hehe+|wkwk+|wk+w+|lol+|lmao+)$",
    r"^(first|pertama|kedua|ketiga|keempat|nomor\s+\d+)$",
    r"^(nice+|good+|great+|amazing+|cool+|beautiful+|lovely+|perfect+)$",
    r"^(terima\s+kasih|makasih|thanks+|thank\s+you+|tq+|arigato+)$",
    r"^(mantap\s*(banget|sekali|betul)?|bagus\s*(banget|sekali)?|keren\s*(abis|banget)?)$",
    r"^((video|kontennya)\s*(bagus|keren|mantap|hebat))$",
    r"^((salam|salam\s+hormat|assalamualaikum|salam\s+sejahtera).*)$",
    r"^(semangat|lanjutkan|tetap\s+semangat|good\s+luck|keep\s+going)$",
    r"^(sukses\s+selalu|maju\s+terus|teruskan|lanjutkan)$",
    r"^(test|tes|cek|check|123|321)$",
    r"^(\d{1,2}/\d{1,2}/\d{2,4})$",
    r"^(\d+)$",
];

pub(super) const NOISE_MARKERS: &[&str] = &[
    // Product / promotion context
    "jual",
    "beli",
    "harga",
    "diskon",
    "promo",
    "gratis",
    "order",
    "pesan sekarang",
    "ready stock",
    "stok tersedia",
    "preorder",
    "tersedia",
    "limited edition",
    "produk terbaru",
    "produk unggulan",
    "paket hemat",
    "official store",
    // Animal / veterinary / medical context
    "makanan anjing",
    "dog food",
    "petshop",
    "hewan peliharaan",
    "hewan ternak",
    "vaksin",
    "dokter hewan",
    "veteriner",
    "klinik hewan",
    "rawat inap",
    "steril",
    "resep dokter",
    "obat hewan",
    "vitamin",
    "grooming hewan",
    // Educational / neutral context
    "fakta",
    "penelitian",
    "data statistik",
    "survey",
    "kajian ilmiah",
    "artikel edukasi",
    "konten edukatif",
    "pembelajaran",
    "materi pelajaran",
    "penyuluhan",
    "sosialisasi",
    "informasi penting",
    "info kesehatan",
    // Other neutral, non-abusive markers
    "tips",
    "trik",
    "cara",
    "tutorial",
    "rekomendasi",
    "ulasan produk",
    "review jujur",
    "how to",
    "panduan",
    "video ini membahas",
    "channel ini",
    "konten ini",
    "gunakan dengan bijak",
    "mari kita pelajari",
    "untuk pemula",
    "untuk anak-anak",
    "untuk hewan",
    // Brands that coincide with literal animal-insult words
    "guinness",
    "netflix",
    "shopee",
    "tokopedia",
    "lazada",
    "blibli",
    "ecommerce",
    "whiskas",
    "royal canin",
    "pedigree",
    "purina",
];

pub(super) const EXPLICIT_TERMS: &[&str] = &[
    // Common profanity
    "anjing",
    "babi",
    "bangsat",
    "bajingan",
    "brengsek",
    "tolol",
    "goblok",
    "bodoh",
    "idiot",
    "kontol",
    "memek",
    "titit",
    "pelacur",
    "lonte",
    "tai",
    "sial",
    "sialan",
    "asu",
    "anjrit",
    "monyet",
    "kunyuk",
    "celeng",
    "keparat",
    "setan",
    "iblis",
    // Religious / ethnic / group slurs
    "kafir",
    "cina",
    "kadrun",
    "cebong",
    "kampret",
    "jancuk",
    "gundik",
    "parasit",
    "binatang",
    // Sexual / harassment terms
    "gatel",
    "genit",
    "mesum",
    "ngentot",
    "binal",
    "birahi",
    "cabul",
    // Obfuscated / leetspeak spellings
    "anjg",
    "b4bi",
    "b4ngs4t",
    "p3lacur",
    "k0ntol",
    "mem3k",
    "g0blok",
    "gblk",
    "s!al",
    "t*l*l",
    "b*d*h",
    "g*bl*k",
    "ng3ntot",
    "b*ngs*t",
    "b*j*ng*n",
    "br*ngs*k",
    "k*nt*l",
];

pub(super) const HIGH_PRECISION_TERMS: &[&str] =
    &["anjing", "bangsat", "tolol", "goblok", "asu", "babi"];
