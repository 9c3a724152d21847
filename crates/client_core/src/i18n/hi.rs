use super::TranslationKey::{self, *};

pub(super) fn text(key: TranslationKey) -> &'static str {
    match key {
        AppName => "प्रिंटबंधन",
        Next => "आगे",
        Back => "पीछे",
        Finish => "पूरा करें",
        Skip => "छोड़ें",
        Save => "सहेजें",
        Cancel => "रद्द करें",
        Delete => "हटाएं",
        Edit => "संपादित करें",
        Confirm => "पुष्टि करें",
        Loading => "लोड हो रहा है...",

        LoginTitle => "प्रिंटबंधन में आपका स्वागत है",
        LoginSubtitle => "अपनी प्रिंटिंग प्रेस एक ही जगह से संभालें",
        PhoneLabel => "मोबाइल नंबर",
        SendOtp => "ओटीपी भेजें",
        InvalidPhone => "मान्य 10 अंकों का मोबाइल नंबर दर्ज करें",

        OtpTitle => "अपना नंबर सत्यापित करें",
        OtpSubtitle => "आपके मोबाइल पर भेजा गया 6 अंकों का कोड दर्ज करें",
        VerifyOtp => "सत्यापित करें",
        ResendOtp => "ओटीपी दोबारा भेजें",
        InvalidOtp => "6 अंकों का कोड दर्ज करें",

        ProfileStepOneTitle => "अपनी प्रेस के बारे में बताएं",
        OwnerName => "मालिक का नाम",
        PressName => "प्रेस का नाम",
        WhatsappNumber => "व्हाट्सएप नंबर",
        SameAsContact => "संपर्क नंबर जैसा ही",
        OwnerNameRequired => "मालिक का नाम आवश्यक है",
        PressNameRequired => "प्रेस का नाम आवश्यक है",
        NameTooLong => "अधिकतम 30 अक्षर होने चाहिए",
        InvalidWhatsapp => "मान्य 10 अंकों का व्हाट्सएप नंबर दर्ज करें",

        ServicesTitle => "आप क्या प्रिंट करते हैं?",
        ServicesSubtitle => "अपनी प्रेस की सेवाएं चुनें",
        SelectAtLeastOneService => "कृपया कम से कम एक सेवा चुनें",

        TeamTitle => "अपनी टीम को आमंत्रित करें",
        Owners => "मालिक",
        Composers => "कंपोज़र",
        Operators => "ऑपरेटर",
        AddMember => "सदस्य जोड़ें",
        PrimaryOwner => "मालिक (प्राथमिक)",
        MemberNameRequired => "नाम आवश्यक है",
        InvalidMobile => "मान्य 10 अंकों का मोबाइल नंबर दर्ज करें",
        MobileInUse => "यह मोबाइल नंबर पहले से उपयोग में है",
        WhatsappRequired => "व्हाट्सएप नंबर आवश्यक है",
        WhatsappInUse => "यह व्हाट्सएप नंबर पहले से उपयोग में है",
        InvalidEmail => "मान्य ईमेल पता दर्ज करें",
        OwnerRequired => "कम से कम एक मालिक आवश्यक है",
        CannotDeletePrimaryOwner => "प्राथमिक मालिक को हटाया नहीं जा सकता",
        ConfirmDeleteMember => "क्या इस सदस्य को टीम से हटाना है?",

        OrdersTitle => "ऑर्डर",
        SearchOrders => "नाम, ऑर्डर आईडी या फ़ोन से खोजें",
        FilterAll => "सभी",
        FilterComposing => "कंपोज़िंग",
        FilterPrinting => "प्रिंटिंग",
        FilterReady => "तैयार",
        FilterDelivered => "डिलीवर हो गया",
        OrderAmount => "राशि",
        AdvancePaid => "अग्रिम",
        PendingAmount => "बकाया",
        DeliveryDate => "डिलीवरी की तारीख",
        OrderDate => "ऑर्डर की तारीख",
        OrderContact => "संपर्क",
        NoOrders => "कोई ऑर्डर नहीं मिला",

        FinanceTitle => "वित्त",
        InventoryTitle => "इन्वेंटरी",
        ComingSoon => "जल्द आ रहा है",

        SettingsTitle => "सेटिंग्स",
        DarkMode => "डार्क मोड",
        LanguageLabel => "भाषा",
        English => "अंग्रेज़ी",
        Hindi => "हिंदी",
        Logout => "लॉग आउट",
    }
}
