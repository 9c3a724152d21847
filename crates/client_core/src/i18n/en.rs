use super::TranslationKey::{self, *};

pub(super) fn text(key: TranslationKey) -> &'static str {
    match key {
        AppName => "PrintBandhan",
        Next => "Next",
        Back => "Back",
        Finish => "Finish",
        Skip => "Skip",
        Save => "Save",
        Cancel => "Cancel",
        Delete => "Delete",
        Edit => "Edit",
        Confirm => "Confirm",
        Loading => "Loading...",

        LoginTitle => "Welcome to PrintBandhan",
        LoginSubtitle => "Manage your printing press in one place",
        PhoneLabel => "Mobile number",
        SendOtp => "Send OTP",
        InvalidPhone => "Enter a valid 10-digit mobile number",

        OtpTitle => "Verify your number",
        OtpSubtitle => "Enter the 6-digit code sent to your mobile",
        VerifyOtp => "Verify",
        ResendOtp => "Resend OTP",
        InvalidOtp => "Enter the 6-digit code",

        ProfileStepOneTitle => "Tell us about your press",
        OwnerName => "Owner name",
        PressName => "Press name",
        WhatsappNumber => "WhatsApp number",
        SameAsContact => "Same as contact number",
        OwnerNameRequired => "Owner name is required",
        PressNameRequired => "Press name is required",
        NameTooLong => "Must be 30 characters or fewer",
        InvalidWhatsapp => "Enter a valid 10-digit WhatsApp number",

        ServicesTitle => "What do you print?",
        ServicesSubtitle => "Select the services your press offers",
        SelectAtLeastOneService => "Please select at least one service",

        TeamTitle => "Invite your team",
        Owners => "Owners",
        Composers => "Composers",
        Operators => "Operators",
        AddMember => "Add member",
        PrimaryOwner => "Owner (Primary)",
        MemberNameRequired => "Name is required",
        InvalidMobile => "Enter a valid 10-digit mobile number",
        MobileInUse => "This mobile number is already in use",
        WhatsappRequired => "WhatsApp number is required",
        WhatsappInUse => "This WhatsApp number is already in use",
        InvalidEmail => "Enter a valid email address",
        OwnerRequired => "At least one owner is required",
        CannotDeletePrimaryOwner => "The primary owner cannot be removed",
        ConfirmDeleteMember => "Remove this member from your team?",

        OrdersTitle => "Orders",
        SearchOrders => "Search by name, order ID or phone",
        FilterAll => "All",
        FilterComposing => "Composing",
        FilterPrinting => "Printing",
        FilterReady => "Ready",
        FilterDelivered => "Delivered",
        OrderAmount => "Amount",
        AdvancePaid => "Advance",
        PendingAmount => "Pending",
        DeliveryDate => "Delivery date",
        OrderDate => "Order date",
        OrderContact => "Contact",
        NoOrders => "No orders found",

        FinanceTitle => "Finance",
        InventoryTitle => "Inventory",
        ComingSoon => "Coming soon",

        SettingsTitle => "Settings",
        DarkMode => "Dark mode",
        LanguageLabel => "Language",
        English => "English",
        Hindi => "Hindi",
        Logout => "Log out",
    }
}
