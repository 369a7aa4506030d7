//! Facility records compiled into the service.
//!
//! Only Mirobod (Toshkent shahri) has checked data. Its record doubles as the
//! template served, marked unverified, for every other district.

use super::models::{Conclusion, Contact, Dispensary, FacilityData, FaqItem, PolyclinicTest};
use crate::features::regions::models::Coordinate;

/// District code of the verified record
pub const VERIFIED_DISTRICT_CODE: &str = "mirabad";

pub fn mirobod() -> FacilityData {
    FacilityData {
        district_name: "Mirobod".into(),
        region_name: "Toshkent shahri".into(),
        verified: true,
        dispensaries: vec![
            Dispensary {
                id: 1,
                title: "🔬 Dermatovenerolog".into(),
                subtitle: "8-sonli Tumanlararo Teri-tanosil kasalliklar dispanseri".into(),
                address: "Yashnobod tumani, Zoxidov ko'chasi, 8-uy".into(),
                address_note: Some("(Jarqo'rg'on, Davr bekati)".into()),
                hours: "08:00 – 12:00".into(),
                phones: Some(vec!["71-291-47-80".into(), "71-291-33-71".into()]),
                coords: Some(Coordinate::new(41.3672, 69.3116)),
            },
            Dispensary {
                id: 2,
                title: "🫁 Ftiziator".into(),
                subtitle: "5-son Tumanlararo Ftiziateriya dispanseri".into(),
                address: "Mirobod tumani, 8-Mart ko'chasi, 59-uy".into(),
                address_note: None,
                hours: "08:00 – 16:00".into(),
                phones: Some(vec!["71-283-98-81".into()]),
                coords: Some(Coordinate::new(41.2809, 69.2954)),
            },
            Dispensary {
                id: 3,
                title: "🧠 Psixiatr".into(),
                subtitle: "2-son Shahar Ruhiy-asab kasalliklari dispanseri".into(),
                address: "Yashnobod tumani, Qorasuv ko'chasi, 25-uy".into(),
                address_note: Some("(Lisunova, Dvorets Aviastroiteley)".into()),
                hours: "08:00 – 16:00".into(),
                phones: Some(vec!["71-294-74-65".into()]),
                coords: Some(Coordinate::new(41.2939, 69.3400)),
            },
            Dispensary {
                id: 4,
                title: "💊 Narkolog".into(),
                subtitle: "Narkologiya dispanseri — Toshkent shahar filiali (RIRSITMNB)".into(),
                address: "Yunusobod tumani, Bobodehqon MFY, 19-mavze, 51-uy".into(),
                address_note: Some("(Nuroniylar sanatoriyasi yaqinida)".into()),
                hours: "08:00 – 15:00".into(),
                phones: None,
                coords: Some(Coordinate::new(41.3804, 69.3166)),
            },
        ],
        polyclinic_tests: vec![
            polyclinic_step(1, "OIV tekshiruvi (117-kod)", "🚪 1-qavat, 14a-xona", "Du/Chor/Ju 08–09", true),
            polyclinic_step(2, "Umumiy qon va qondagi qand", "🚪 2-qavat, 35-xona", "Laboratoriya", false),
            polyclinic_step(3, "EKG (elektrokardiogramma)", "🚪 2-qavat, 32-xona", "Yurak", false),
            polyclinic_step(4, "UTT tekshiruvi (ultratovush)", "🚪 1-qavat, 14-xona", "Ultratovush", false),
            polyclinic_step(5, "Ginekolog", "🚪 2-qavat, 17-xona", "Ayollar", false),
            polyclinic_step(6, "Urolog", "🚪 2-qavat, 30-xona", "Erkaklar", false),
            polyclinic_step(7, "Endokrinolog", "🚪 2-qavat, 24-xona", "Gormon", false),
            polyclinic_step(8, "Revmatolog", "🚪 2-qavat, 29-xona", "Bo'g'im", false),
        ],
        conclusion: Conclusion {
            location: "Mirobod TTB MKP — 3-qavat, 49-xona".into(),
            description: "Barcha dispanser va poliklinika ma'lumotnomalarini olib keling. \
                          Shu yerda yakuniy tibbiy xulosa beriladi."
                .into(),
        },
        contact: Contact {
            name: "Mirobod TTB — Masul Shaxs".into(),
            description: "Nikoh tibbiy ko'rigi bo'yicha barcha savollaringizga javob beramiz"
                .into(),
            phone: None,
            telegram: Some("MN_889G".into()),
        },
        faq: vec![
            faq(
                "📋 Qanday hujjatlar kerak?",
                "Pasport asl nusxasi va fotokopiyasi, propiska (ro'yxatdan o'tish) fotokopiyasi. \
                 Ayrim joylar qo'shimcha hujjat so'rashi mumkin.",
            ),
            faq(
                "⏱️ Hammasi qancha vaqt oladi?",
                "Odatda 2–4 kun. Dispanserlarga alohida kunlarda borish qulay. Poliklinika \
                 tekshiruvlarini bir kunda o'tish mumkin, lekin OIV uchun faqat Du/Chor/Juma \
                 kunlari boring.",
            ),
            faq(
                "💰 Tekshiruvlar pulli yoki beplatmi?",
                "Asosiy tibbiy ko'rik bepul. Lekin ba'zi dispanserlarda hujjat rasmiylashtiruvi \
                 uchun to'lov bo'lishi mumkin. Aniq ma'lumot uchun masul shaxs bilan bog'laning.",
            ),
            faq(
                "🕐 Qaysi dispanserlarga avval borish kerak?",
                "Ketma-ketlik muhim emas. Lekin Dermatovenerologga 08:00–12:00 orasida boring \
                 (qabul vaqti qisqa). Narkolog 08:00–15:00 gacha.",
            ),
            faq(
                "📞 Savollarim bo'lsa kimga murojaat qilaman?",
                "Quyidagi \"Bog'lanish\" bo'limidagi telefon yoki Telegram orqali masul shaxs \
                 bilan bog'laning. Javob vaqti — ish kuni soatlari ichida.",
            ),
        ],
    }
}

fn polyclinic_step(step: u32, name: &str, location: &str, tag: &str, special: bool) -> PolyclinicTest {
    PolyclinicTest {
        step,
        name: name.into(),
        location: location.into(),
        tag: tag.into(),
        special,
    }
}

fn faq(question: &str, answer: &str) -> FaqItem {
    FaqItem {
        question: question.into(),
        answer: answer.into(),
    }
}
