/// Persian stop words in normalized form (arabic yeh and kaf, no hamza or
/// alef madda). Also the common-word set for grams.
pub const PERSIAN: &[&str] = &[
    "انان", "نداشته", "سراسر", "خياه", "ايشان", "وي", "تاكنون", "بيشتري", "دوم", "پس",
    "ناشي", "وگو", "يا", "داشتند", "سپس", "هنگام", "هرگز", "پنج", "نشان", "امسال",
    "ديگر", "گروهي", "شدند", "چطور", "ده", "و", "دو", "نخستين", "ولي", "چرا",
    "چه", "وسط", "ه", "كدام", "قابل", "يك", "رفت", "هفت", "همچنين", "در",
    "هزار", "بله", "بلي", "شايد", "اما", "شناسي", "گرفته", "دهد", "داشته", "دانست",
    "داشتن", "خواهيم", "ميليارد", "وقتيكه", "امد", "خواهد", "جز", "اورده", "شده", "بلكه",
    "خدمات", "شدن", "برخي", "نبود", "بسياري", "جلوگيري", "حق", "كردند", "نوعي", "بعري",
    "نكرده", "نظير", "نبايد", "بوده", "بودن", "داد", "اورد", "هست", "جايي", "شود",
    "دنبال", "داده", "بايد", "سابق", "هيچ", "همان", "انجا", "كمتر", "كجاست", "گردد",
    "كسي", "تر", "مردم", "تان", "دادن", "بودند", "سري", "جدا", "ندارند", "مگر",
    "يكديگر", "دارد", "دهند", "بنابراين", "هنگامي", "سمت", "جا", "انچه", "خود", "دادند",
    "زياد", "دارند", "اثر", "بدون", "بهترين", "بيشتر", "البته", "به", "براساس", "بيرون",
    "كرد", "بعضي", "گرفت", "توي", "اي", "ميليون", "او", "جريان", "تول", "بر",
    "مانند", "برابر", "باشيم", "مدتي", "گويند", "اكنون", "تا", "تنها", "جديد", "چند",
    "بي", "نشده", "كردن", "كردم", "گويد", "كرده", "كنيم", "نمي", "نزد", "روي",
    "قصد", "فقط", "بالاي", "ديگران", "اين", "ديروز", "توسط", "سوم", "ايم", "دانند",
    "سوي", "استفاده", "شما", "كنار", "داريم", "ساخته", "طور", "امده", "رفته", "نخست",
    "بيست", "نزديك", "طي", "كنيد", "از", "انها", "تمامي", "داشت", "يكي", "طريق",
    "اش", "چيست", "روب", "نمايد", "گفت", "چندين", "چيزي", "تواند", "ام", "ايا",
    "با", "ان", "ايد", "ترين", "اينكه", "ديگري", "راه", "هايي", "بروز", "همچنان",
    "پاعين", "كس", "حدود", "مختلف", "مقابل", "چيز", "گيرد", "ندارد", "ضد", "همچون",
    "سازي", "شان", "مورد", "باره", "مرسي", "خويش", "برخوردار", "چون", "خارج", "شش",
    "هنوز", "تحت", "ضمن", "هستيم", "گفته", "فكر", "بسيار", "پيش", "براي", "روزهاي",
    "انكه", "نخواهد", "بالا", "كل", "وقتي", "كي", "چنين", "كه", "گيري", "نيست",
    "است", "كجا", "كند", "نيز", "يابد", "بندي", "حتي", "توانند", "عقب", "خواست",
    "كنند", "بين", "تمام", "همه", "ما", "باشند", "مثل", "شد", "اري", "باشد",
    "اره", "طبق", "بعد", "اگر", "صورت", "غير", "جاي", "بيش", "ريزي", "اند",
    "زيرا", "چگونه", "بار", "لطفا", "مي", "درباره", "من", "ديده", "همين", "گذاري",
    "برداري", "علت", "گذاشته", "هم", "فوق", "نه", "ها", "شوند", "اباد", "همواره",
    "هر", "اول", "خواهند", "چهار", "نام", "امروز", "مان", "هاي", "قبل", "كنم",
    "سعي", "تازه", "را", "هستند", "زير", "جلوي", "عنوان", "بود",
];
