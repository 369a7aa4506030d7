//! Reference catalog of Uzbekistan's regions and districts.
//!
//! Order is significant: regions are listed in display order and districts in
//! the order the district resolver scans them (first prefix match wins).
//! Several entries intentionally share a code (urban and rural halves of one
//! municipality use the same facility data).

/// Static seed for one region
pub struct RegionSeed {
    pub key: &'static str,
    pub name: &'static str,
    /// (lat, lon)
    pub center: (f64, f64),
    pub zoom: u8,
    /// (display name, code)
    pub districts: &'static [(&'static str, &'static str)],
}

pub const REGION_SEEDS: &[RegionSeed] = &[
    RegionSeed {
        key: "toshkent_shahar",
        name: "Toshkent shahri",
        center: (41.311081, 69.240562),
        zoom: 11,
        districts: &[
            ("Bektemir", "bektemir"),
            ("Chilonzor", "chilanzar"),
            ("Mirobod", "mirabad"),
            ("Mirzo Ulug'bek", "mirzo_ulugbek"),
            ("Olmazor", "almazar"),
            ("Sergeli", "sergeli"),
            ("Shayxontohur", "shaykhantokhur"),
            ("Uchtepa", "uchtepa"),
            ("Yakkasaroy", "yakkasaray"),
            ("Yangihayot", "yangihayot"),
            ("Yashnobod", "yashnobod"),
            ("Yunusobod", "yunusabad"),
        ],
    },
    RegionSeed {
        key: "toshkent_viloyat",
        name: "Toshkent viloyati",
        center: (41.162, 69.86),
        zoom: 9,
        districts: &[
            ("Bekobod", "bekabad"),
            ("Boʻstonliq", "bostanlik"),
            ("Boʻka", "buka"),
            ("Chinoz", "chinaz"),
            ("Qibray", "kibray"),
            ("Ohangaron", "akhangaran"),
            ("Oqqoʻrgʻon", "akkurgan"),
            ("Parkent", "parkent"),
            ("Piskent", "pskent"),
            ("Quyi Chirchiq", "kuyichirchik"),
            ("Oʻrta Chirchiq", "urtachirchik"),
            ("Yangiyoʻl", "yangiyul"),
            ("Yuqori Chirchiq", "yukarichirchik"),
            ("Zangiota", "zangiata"),
        ],
    },
    RegionSeed {
        key: "andijon",
        name: "Andijon viloyati",
        center: (40.7821, 72.3442),
        zoom: 10,
        districts: &[
            ("Andijon sh.", "andijan"),
            ("Ulug'nor", "ulugnar"),
            ("Xo'jaobod", "khadjaabad"),
            ("Marhamat", "markhamat"),
            ("Asaka", "asaka"),
            ("Shahrixon", "shakhrixan"),
            ("Bo'ston", "boz"),
            ("Jalaquduq", "djalalkuduk"),
            ("Buloqboshi", "bulakbashi"),
            ("Qo'rg'ontepa", "kurgantepa"),
            ("Baliqchi", "balikchi"),
            ("Xonobod", "khanabad"),
            ("Oltinko'l", "altinkul"),
            ("Andijon t.", "andijan"),
            ("Izboskan", "izboskan"),
            ("Paxtaobod", "paxtaabad"),
        ],
    },
    RegionSeed {
        key: "buxoro",
        name: "Buxoro viloyati",
        center: (39.7747, 64.4286),
        zoom: 9,
        districts: &[
            ("G'ijduvon", "gijduvan"),
            ("Jondor", "jondor"),
            ("Olot", "alat"),
            ("Kogon", "kagan"),
            ("Shofirkon", "shafirkan"),
            ("Romitan", "ramitan"),
            ("Peshku", "peshku"),
            ("Vobkent", "vabkent"),
            ("Buxoro sh.", "bukhara"),
            ("Buxoro t.", "bukhara"),
            ("Qorako'l", "karakul"),
            ("Qorovulbozor", "karaulbazar"),
        ],
    },
    RegionSeed {
        key: "fargona",
        name: "Farg'ona viloyati",
        center: (40.3863, 71.7865),
        zoom: 9,
        districts: &[
            ("Qo'qon", "kokand"),
            ("Furqat", "furkat"),
            ("O'zbekiston", "uzbekistan"),
            ("Beshariq", "besharik"),
            ("So'x", "sokh"),
            ("Farg'ona", "fergana"),
            ("Qo'shtepa", "kushtepa"),
            ("Buvayda", "buvayda"),
            ("Dang'ara", "dangara"),
            ("Yozyovon", "yazyavan"),
            ("Quva", "kuva"),
            ("Toshloq", "tashlak"),
            ("Marg'ilon", "margilan"),
            ("Uchko'prik", "uchkuprik"),
            ("Quvasoy", "kuvasay"),
            ("Oltiariq", "altiarik"),
            ("Rishton", "rishtan"),
            ("Bog'dod", "bagdad"),
        ],
    },
    RegionSeed {
        key: "jizzax",
        name: "Jizzax viloyati",
        center: (40.1169, 67.8415),
        zoom: 9,
        districts: &[
            ("Forish", "farish"),
            ("Mirzacho'l", "mirzachul"),
            ("Arnasoy", "arnasay"),
            ("Yangiobod", "yangiabad"),
            ("Jizzax", "dzhizak"),
            ("Baxmal", "bakhmal"),
            ("G'allaorol", "gallyaaral"),
            ("Do'stlik", "dustlik"),
            ("Zafarobod", "zafarabad"),
            ("Zomin", "zaamin"),
            ("Zarbdor", "zarbdar"),
            ("Paxtakor", "paxtakor"),
            ("Sharof Rashidov", "sharof"),
        ],
    },
    RegionSeed {
        key: "namangan",
        name: "Namangan viloyati",
        center: (40.9984, 71.6726),
        zoom: 10,
        districts: &[
            ("Yangiqo'rg'on", "yangikurgan"),
            ("Kosonsoy", "kasansay"),
            ("Namangan sh.", "namangan"),
            ("Uychi", "uychi"),
            ("Chortoq", "chartak"),
            ("Norin", "narin"),
            ("Uchqo'rg'on", "uchkurgan"),
            ("Mingbuloq", "mingbulak"),
            ("Chust", "chust"),
            ("Pop", "pap"),
            ("To'raqo'rg'on", "turakurgan"),
        ],
    },
    RegionSeed {
        key: "navoiy",
        name: "Navoiy viloyati",
        center: (40.1031, 65.3725),
        zoom: 8,
        districts: &[
            ("Karmana", "karmana"),
            ("Uchquduq", "uchkuduk"),
            ("Konimex", "kanimekh"),
            ("Tomdi", "tamdi"),
            ("Navbahor", "navbakhor"),
            ("Nurota", "nurata"),
            ("Navoiy", "navoi"),
            ("Qiziltepa", "kiziltepa"),
            ("Xatirchi", "khatirchi"),
            ("Zarafshon", "zarafshan"),
        ],
    },
    RegionSeed {
        key: "qashqadaryo",
        name: "Qashqadaryo viloyati",
        center: (38.8605, 66.0464),
        zoom: 8,
        districts: &[
            ("Yakkabog'", "yakkabag"),
            ("Kitob", "kitab"),
            ("Qamashi", "kamashi"),
            ("Qarshi", "karshi"),
            ("Kasbi", "kasbi"),
            ("Mirishkor", "mirishkar"),
            ("Nishon", "nishan"),
            ("G'uzor", "guzar"),
            ("Dehqonobod", "dehkanabad"),
            ("Koson", "kasan"),
            ("Muborak", "mubarek"),
            ("Chiroqchi", "chirakchi"),
            ("Shahrisabz", "shakhrisabz"),
        ],
    },
    RegionSeed {
        key: "samarqand",
        name: "Samarqand viloyati",
        center: (39.6542, 66.9597),
        zoom: 9,
        districts: &[
            ("Bulung'ur", "bulungur"),
            ("Paxtachi", "pakhtachi"),
            ("Pastdarg'om", "pastdargom"),
            ("Ishtixon", "ishtikhan"),
            ("Narpay", "narpay"),
            ("Kattaqo'rg'on sh.", "kattakurgan"),
            ("Kattaqo'rg'on t.", "kattakurgan"),
            ("Qo'shrabot", "koshrabad"),
            ("Samarqand t.", "samarkand"),
            ("Urgut", "urgut"),
            ("Samarqand sh.", "samarkand"),
            ("Toyloq", "taylak"),
            ("Jomboy", "dzhambay"),
            ("Payariq", "payarik"),
            ("Oqdaryo", "akdarya"),
            ("Nurobod", "nurabad"),
        ],
    },
    RegionSeed {
        key: "sirdaryo",
        name: "Sirdaryo viloyati",
        center: (40.8422, 68.6631),
        zoom: 9,
        districts: &[
            ("Guliston t.", "gulistan"),
            ("Sayxunobod", "saykhunabad"),
            ("Guliston sh.", "gulistan"),
            ("Oqoltin", "akaltin"),
            ("Sirdaryo", "sirdarya"),
            ("Boyovut", "bayaut"),
            ("Shirin", "shirin"),
            ("Yangiyer", "yangiyer"),
            ("Sardoba", "sardoba"),
            ("Xovos", "khavas"),
            ("Mirzaobod", "mirzaabad"),
        ],
    },
    RegionSeed {
        key: "surxondaryo",
        name: "Surxondaryo viloyati",
        center: (37.934, 67.5507),
        zoom: 8,
        districts: &[
            ("Boysun", "baysun"),
            ("Muzrabot", "muzrabad"),
            ("Sherobod", "sherabad"),
            ("Angor", "angor"),
            ("Termiz sh.", "termez"),
            ("Termiz t.", "termez"),
            ("Sariosiyo", "sariasiya"),
            ("Jarqo'rg'on", "dzharkurgan"),
            ("Qiziriq", "kizirik"),
            ("Sho'rchi", "shurchi"),
            ("Qumqo'rg'on", "kumkurgan"),
            ("Uzun", "uzun"),
            ("Oltinsoy", "altinsay"),
            ("Denov", "denau"),
        ],
    },
    RegionSeed {
        key: "xorazm",
        name: "Xorazm viloyati",
        center: (41.55, 60.6333),
        zoom: 9,
        districts: &[
            ("Bog'ot", "bagat"),
            ("Gurlan", "gurlen"),
            ("Qo'shko'pir", "koshkupir"),
            ("Shovot", "shavat"),
            ("Xiva t.", "khiva"),
            ("Xazorasp", "khazarasp"),
            ("Xonqa", "khanka"),
            ("Yangiariq", "yangiarik"),
            ("Yangibozor", "yangibazar"),
            ("Urganch", "urgench"),
            ("Xiva sh.", "khiva"),
        ],
    },
    RegionSeed {
        key: "qoraqalpogiston",
        name: "Qoraqalpog'iston Respublikasi",
        center: (43.6667, 59.2),
        zoom: 7,
        districts: &[
            ("Amudaryo", "amudarya"),
            ("Chimboy", "chimbay"),
            ("Qanliko'l", "kanlikul"),
            ("Shumanay", "shumanay"),
            ("Xo'jayli", "khojeyli"),
            ("Kegeyli", "kegeyli"),
            ("Mo'ynoq", "muynak"),
            ("Nukus", "nukus"),
            ("Qorao'zak", "karauzyak"),
            ("Qo'ng'irot", "kungrad"),
            ("Taxtako'pir", "takhtakupir"),
            ("To'rtko'l", "turtkul"),
            ("Beruniy", "beruniy"),
            ("Ellikqala", "ellikkala"),
        ],
    },
];
