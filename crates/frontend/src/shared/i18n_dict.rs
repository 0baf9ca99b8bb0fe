//! Static dictionaries. Keys are camelCase; enum values use the camelCase
//! form of their wire code.

pub static EN: &[(&str, &str)] = &[
    // shell
    ("appTitle", "Real Estate CRM"),
    ("menu", "Menu"),
    ("language", "Language"),
    ("inventory", "Inventory"),
    ("catalog", "Catalog"),
    ("serviceCatalog", "Services"),
    ("marketing", "Marketing"),
    // actions
    ("add", "Add"),
    ("edit", "Edit"),
    ("delete", "Delete"),
    ("deleting", "Deleting..."),
    ("save", "Save"),
    ("saving", "Saving..."),
    ("cancel", "Cancel"),
    ("search", "Search"),
    ("refresh", "Refresh"),
    ("filters", "Filters"),
    ("reset", "Reset"),
    ("apply", "Apply"),
    ("actions", "Actions"),
    ("assignLeads", "Assign leads"),
    ("addTask", "Add task"),
    // states
    ("loading", "Loading..."),
    ("loadFailed", "Could not load records"),
    ("noRecords", "No records"),
    ("selectPlaceholder", "Select..."),
    ("deleteWarning", "This record will be deleted permanently. This cannot be undone."),
    ("operationFailed", "The operation failed. Please try again."),
    ("fillRequiredFields", "Please fill in all required fields"),
    ("missing", "missing"),
    ("yes", "Yes"),
    ("no", "No"),
    // validation
    ("fieldRequired", "This field is required"),
    ("emailRequired", "Email is required"),
    ("invalidEmail", "Invalid email address"),
    ("invalidNumber", "Invalid number"),
    ("invalidDate", "Invalid date"),
    ("passwordTooShort", "Password must be at least 6 characters"),
    ("selectAtLeastOne", "Select at least one"),
    // entities
    ("lead", "Lead"),
    ("leads", "Leads"),
    ("deal", "Deal"),
    ("deals", "Deals"),
    ("unit", "Unit"),
    ("units", "Units"),
    ("project", "Project"),
    ("projects", "Projects"),
    ("developer", "Developer"),
    ("developers", "Developers"),
    ("owner", "Owner"),
    ("owners", "Owners"),
    ("product", "Product"),
    ("products", "Products"),
    ("productCategory", "Product category"),
    ("productCategories", "Product categories"),
    ("service", "Service"),
    ("services", "Services"),
    ("servicePackage", "Service package"),
    ("servicePackages", "Service packages"),
    ("serviceProvider", "Service provider"),
    ("serviceProviders", "Service providers"),
    ("supplier", "Supplier"),
    ("suppliers", "Suppliers"),
    ("campaign", "Campaign"),
    ("campaigns", "Campaigns"),
    ("integrationAccount", "Integration account"),
    ("integrationAccounts", "Integration accounts"),
    ("user", "User"),
    ("users", "Users"),
    // fields
    ("name", "Name"),
    ("title", "Title"),
    ("code", "Code"),
    ("phone", "Phone"),
    ("email", "Email"),
    ("password", "Password"),
    ("role", "Role"),
    ("isActive", "Active"),
    ("source", "Source"),
    ("status", "Status"),
    ("stage", "Stage"),
    ("assignedTo", "Assigned to"),
    ("assignTo", "Assign to"),
    ("budget", "Budget"),
    ("minBudget", "Minimum budget"),
    ("interestedIn", "Interested in"),
    ("notes", "Notes"),
    ("amount", "Amount"),
    ("minAmount", "Minimum amount"),
    ("maxAmount", "Maximum amount"),
    ("expectedCloseDate", "Expected close date"),
    ("unitType", "Unit type"),
    ("area", "Area (m²)"),
    ("bedrooms", "Bedrooms"),
    ("price", "Price"),
    ("maxPrice", "Maximum price"),
    ("floor", "Floor"),
    ("location", "Location"),
    ("totalUnits", "Total units"),
    ("launchDate", "Launch date"),
    ("description", "Description"),
    ("contactPerson", "Contact person"),
    ("website", "Website"),
    ("establishedYear", "Established"),
    ("nationalId", "National ID"),
    ("address", "Address"),
    ("sku", "SKU"),
    ("category", "Category"),
    ("stock", "Stock"),
    ("durationMinutes", "Duration (min)"),
    ("provider", "Provider"),
    ("specialty", "Specialty"),
    ("channel", "Channel"),
    ("startDate", "Start date"),
    ("endDate", "End date"),
    ("platform", "Platform"),
    ("accountId", "Account ID"),
    ("accessToken", "Access token"),
    ("dueDate", "Due date"),
    // filter sections
    ("pipeline", "Pipeline"),
    ("ownership", "Ownership"),
    ("availability", "Availability"),
    ("progress", "Progress"),
    // LeadSource
    ("referral", "Referral"),
    ("socialMedia", "Social media"),
    ("walkIn", "Walk-in"),
    ("other", "Other"),
    // LeadStatus
    ("new", "New"),
    ("contacted", "Contacted"),
    ("qualified", "Qualified"),
    ("negotiation", "Negotiation"),
    ("won", "Won"),
    ("lost", "Lost"),
    // DealStage
    ("prospecting", "Prospecting"),
    ("proposal", "Proposal"),
    ("closedWon", "Closed won"),
    ("closedLost", "Closed lost"),
    // UnitType
    ("apartment", "Apartment"),
    ("villa", "Villa"),
    ("townhouse", "Townhouse"),
    ("office", "Office"),
    ("retail", "Retail"),
    ("land", "Land"),
    // UnitStatus
    ("available", "Available"),
    ("reserved", "Reserved"),
    ("sold", "Sold"),
    ("rented", "Rented"),
    // ProjectStatus
    ("planning", "Planning"),
    ("underConstruction", "Under construction"),
    ("completed", "Completed"),
    ("onHold", "On hold"),
    // UserRole
    ("admin", "Admin"),
    ("manager", "Manager"),
    ("salesAgent", "Sales agent"),
    ("viewer", "Viewer"),
    // CampaignChannel / IntegrationPlatform
    ("facebook", "Facebook"),
    ("google", "Google"),
    ("googleAds", "Google Ads"),
    ("instagram", "Instagram"),
    ("sms", "SMS"),
    ("offline", "Offline"),
    ("whatsapp", "WhatsApp"),
    ("tiktok", "TikTok"),
    // CampaignStatus
    ("draft", "Draft"),
    ("active", "Active"),
    ("paused", "Paused"),
];

pub static AR: &[(&str, &str)] = &[
    ("appTitle", "نظام إدارة العقارات"),
    ("menu", "القائمة"),
    ("language", "اللغة"),
    ("inventory", "المخزون العقاري"),
    ("catalog", "الكتالوج"),
    ("serviceCatalog", "الخدمات"),
    ("marketing", "التسويق"),
    ("add", "إضافة"),
    ("edit", "تعديل"),
    ("delete", "حذف"),
    ("deleting", "جارٍ الحذف..."),
    ("save", "حفظ"),
    ("saving", "جارٍ الحفظ..."),
    ("cancel", "إلغاء"),
    ("search", "بحث"),
    ("refresh", "تحديث"),
    ("filters", "عوامل التصفية"),
    ("reset", "إعادة تعيين"),
    ("apply", "تطبيق"),
    ("actions", "الإجراءات"),
    ("assignLeads", "تعيين العملاء المحتملين"),
    ("addTask", "إضافة مهمة"),
    ("loading", "جارٍ التحميل..."),
    ("loadFailed", "تعذر تحميل السجلات"),
    ("noRecords", "لا توجد سجلات"),
    ("selectPlaceholder", "اختر..."),
    ("deleteWarning", "سيتم حذف هذا السجل نهائياً ولا يمكن التراجع."),
    ("operationFailed", "فشلت العملية. يرجى المحاولة مرة أخرى."),
    ("fillRequiredFields", "يرجى ملء جميع الحقول المطلوبة"),
    ("missing", "مفقود"),
    ("yes", "نعم"),
    ("no", "لا"),
    ("fieldRequired", "هذا الحقل مطلوب"),
    ("emailRequired", "البريد الإلكتروني مطلوب"),
    ("invalidEmail", "بريد إلكتروني غير صالح"),
    ("invalidNumber", "رقم غير صالح"),
    ("invalidDate", "تاريخ غير صالح"),
    ("passwordTooShort", "يجب ألا تقل كلمة المرور عن 6 أحرف"),
    ("selectAtLeastOne", "اختر عنصراً واحداً على الأقل"),
    ("lead", "عميل محتمل"),
    ("leads", "العملاء المحتملون"),
    ("deal", "صفقة"),
    ("deals", "الصفقات"),
    ("unit", "وحدة"),
    ("units", "الوحدات"),
    ("project", "مشروع"),
    ("projects", "المشاريع"),
    ("developer", "مطور"),
    ("developers", "المطورون"),
    ("owner", "مالك"),
    ("owners", "الملاك"),
    ("product", "منتج"),
    ("products", "المنتجات"),
    ("productCategory", "فئة منتج"),
    ("productCategories", "فئات المنتجات"),
    ("service", "خدمة"),
    ("services", "الخدمات"),
    ("servicePackage", "باقة خدمات"),
    ("servicePackages", "باقات الخدمات"),
    ("serviceProvider", "مزود خدمة"),
    ("serviceProviders", "مزودو الخدمات"),
    ("supplier", "مورد"),
    ("suppliers", "الموردون"),
    ("campaign", "حملة"),
    ("campaigns", "الحملات"),
    ("integrationAccount", "حساب تكامل"),
    ("integrationAccounts", "حسابات التكامل"),
    ("user", "مستخدم"),
    ("users", "المستخدمون"),
    ("name", "الاسم"),
    ("title", "العنوان"),
    ("code", "الرمز"),
    ("phone", "الهاتف"),
    ("email", "البريد الإلكتروني"),
    ("password", "كلمة المرور"),
    ("role", "الدور"),
    ("isActive", "نشط"),
    ("source", "المصدر"),
    ("status", "الحالة"),
    ("stage", "المرحلة"),
    ("assignedTo", "مسند إلى"),
    ("assignTo", "إسناد إلى"),
    ("budget", "الميزانية"),
    ("minBudget", "الحد الأدنى للميزانية"),
    ("interestedIn", "مهتم بـ"),
    ("notes", "ملاحظات"),
    ("amount", "المبلغ"),
    ("minAmount", "الحد الأدنى للمبلغ"),
    ("maxAmount", "الحد الأقصى للمبلغ"),
    ("expectedCloseDate", "تاريخ الإغلاق المتوقع"),
    ("unitType", "نوع الوحدة"),
    ("area", "المساحة (م²)"),
    ("bedrooms", "غرف النوم"),
    ("price", "السعر"),
    ("maxPrice", "الحد الأقصى للسعر"),
    ("floor", "الطابق"),
    ("location", "الموقع"),
    ("totalUnits", "إجمالي الوحدات"),
    ("launchDate", "تاريخ الإطلاق"),
    ("description", "الوصف"),
    ("contactPerson", "جهة الاتصال"),
    ("website", "الموقع الإلكتروني"),
    ("establishedYear", "سنة التأسيس"),
    ("nationalId", "رقم الهوية"),
    ("address", "العنوان"),
    ("sku", "رمز المنتج"),
    ("category", "الفئة"),
    ("stock", "المخزون"),
    ("durationMinutes", "المدة (دقيقة)"),
    ("provider", "المزود"),
    ("specialty", "التخصص"),
    ("channel", "القناة"),
    ("startDate", "تاريخ البدء"),
    ("endDate", "تاريخ الانتهاء"),
    ("platform", "المنصة"),
    ("accountId", "معرف الحساب"),
    ("accessToken", "رمز الوصول"),
    ("dueDate", "تاريخ الاستحقاق"),
    ("pipeline", "مسار المبيعات"),
    ("ownership", "المسؤولية"),
    ("availability", "التوفر"),
    ("progress", "التقدم"),
    ("referral", "إحالة"),
    ("socialMedia", "وسائل التواصل"),
    ("walkIn", "زيارة مباشرة"),
    ("other", "أخرى"),
    ("new", "جديد"),
    ("contacted", "تم التواصل"),
    ("qualified", "مؤهل"),
    ("negotiation", "تفاوض"),
    ("won", "ناجح"),
    ("lost", "خاسر"),
    ("prospecting", "استكشاف"),
    ("proposal", "عرض"),
    ("closedWon", "مغلقة بنجاح"),
    ("closedLost", "مغلقة بخسارة"),
    ("apartment", "شقة"),
    ("villa", "فيلا"),
    ("townhouse", "تاون هاوس"),
    ("office", "مكتب"),
    ("retail", "محل تجاري"),
    ("land", "أرض"),
    ("available", "متاحة"),
    ("reserved", "محجوزة"),
    ("sold", "مباعة"),
    ("rented", "مؤجرة"),
    ("planning", "تخطيط"),
    ("underConstruction", "قيد الإنشاء"),
    ("completed", "مكتمل"),
    ("onHold", "معلق"),
    ("admin", "مدير النظام"),
    ("manager", "مدير"),
    ("salesAgent", "وكيل مبيعات"),
    ("viewer", "مشاهد"),
    ("facebook", "فيسبوك"),
    ("google", "جوجل"),
    ("googleAds", "إعلانات جوجل"),
    ("instagram", "إنستغرام"),
    ("sms", "رسائل نصية"),
    ("offline", "خارج الإنترنت"),
    ("whatsapp", "واتساب"),
    ("tiktok", "تيك توك"),
    ("draft", "مسودة"),
    ("active", "نشطة"),
    ("paused", "متوقفة"),
];
