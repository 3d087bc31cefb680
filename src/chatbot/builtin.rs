//! Reply lines bundled with the server

use super::{IntentCategory, Language};

type CategoryLines = &'static [(IntentCategory, &'static [&'static str])];

pub(super) const LINES: &[(Language, CategoryLines)] = &[
    (Language::En, EN),
    (Language::Hi, HI),
    (Language::Es, ES),
    (Language::Fr, FR),
];

pub(super) const ECHO_TEMPLATES: &[(Language, &[&str])] = &[
    (
        Language::En,
        &[
            "I understand you're asking about \"{utterance}\". Let me help you with that!",
            "That's an interesting question about \"{utterance}\". Here's what I can tell you:",
            "Regarding \"{utterance}\", I'd be happy to provide some information.",
            "I see you're interested in \"{utterance}\". Let me share some insights with you.",
        ],
    ),
    (
        Language::Hi,
        &[
            "मैं समझता हूं कि आप \"{utterance}\" के बारे में पूछ रहे हैं। मैं इसमें आपकी मदद करूंगा!",
            "\"{utterance}\" के बारे में, मैं आपको कुछ जानकारी देने में खुशी महसूस करूंगा।",
        ],
    ),
    (
        Language::Es,
        &[
            "Entiendo que preguntas sobre \"{utterance}\". ¡Déjame ayudarte con eso!",
            "Sobre \"{utterance}\", con gusto te daré información.",
        ],
    ),
    (
        Language::Fr,
        &[
            "Je comprends que vous posez une question sur \"{utterance}\". Laissez-moi vous aider!",
            "Concernant \"{utterance}\", je serais ravi de vous donner des informations.",
        ],
    ),
];

const EN: CategoryLines = &[
    (
        IntentCategory::Greeting,
        &[
            "Hello! I'm your Smart Tour Jharkhand assistant. How can I help you explore the beautiful state of Jharkhand?",
            "Hi there! Ready to discover Jharkhand's rich tribal culture and natural beauty? I'm here to help!",
            "Welcome to Smart Tour Jharkhand! I can assist you with exploring tribal heritage, wildlife, and cultural experiences.",
        ],
    ),
    (
        IntentCategory::Help,
        &[
            "I can help you with:",
            "• Jharkhand's tribal attractions and cultural sites",
            "• Planning personalized itineraries across Jharkhand",
            "• Booking tribal homestays and eco-lodges",
            "• Local tribal recommendations and cultural insights",
            "• Transportation within Jharkhand",
            "• Tribal language help (Santhali, Ho, Mundari)",
            "• Wildlife and nature experiences",
            "What would you like to explore in Jharkhand?",
        ],
    ),
    (
        IntentCategory::Attractions,
        &[
            "Here are Jharkhand's must-visit attractions:",
            "• Betla National Park - Wildlife safari and tiger spotting",
            "• Hazaribagh Wildlife Sanctuary - Bird watching paradise",
            "• Netarhat Hill Station - Queen of Chotanagpur",
            "• Ranchi - Capital city with waterfalls and temples",
            "• Jamshedpur - Steel city with beautiful parks",
            "• Tribal villages - Authentic cultural experiences",
            "• Ancient temples and archaeological sites",
            "Tell me your interests and I'll recommend the best places to visit in Jharkhand!",
        ],
    ),
    (
        IntentCategory::Itinerary,
        &[
            "I'd love to help you plan your itinerary! To create the perfect plan, I need to know:",
            "• Your destination",
            "• Travel dates",
            "• Number of travelers",
            "• Your interests (culture, nature, adventure, food, etc.)",
            "• Budget range",
            "• Travel style (budget, mid-range, luxury)",
            "Once you provide these details, I'll create a personalized itinerary just for you!",
        ],
    ),
    (
        IntentCategory::Restaurants,
        &[
            "I can help you find the best restaurants! Here's what I can recommend:",
            "• Local cuisine and traditional dishes",
            "• Fine dining and upscale restaurants",
            "• Street food and local markets",
            "• Vegetarian and vegan options",
            "• Family-friendly establishments",
            "• Restaurants with great views or atmosphere",
            "What type of dining experience are you looking for?",
        ],
    ),
    (
        IntentCategory::Booking,
        &[
            "I can help you book various services:",
            "• Hotels and accommodations",
            "• Tours and activities",
            "• Transportation (flights, trains, buses)",
            "• Restaurant reservations",
            "• Event tickets",
            "• Local experiences and workshops",
            "What would you like to book? I'll guide you through the process!",
        ],
    ),
    (
        IntentCategory::Fallback,
        &[
            "I can help you find detailed information about this topic.",
            "Would you like me to provide more specific recommendations?",
            "Feel free to ask me more questions about this!",
            "I'm here to help you with any travel-related questions.",
        ],
    ),
];

const HI: CategoryLines = &[
    (
        IntentCategory::Greeting,
        &[
            "नमस्ते! मैं आपका Smart Tour Jharkhand सहायक हूं। मैं आपको झारखंड की खोज में कैसे मदद कर सकता हूं?",
            "हैलो! झारखंड की समृद्ध आदिवासी संस्कृति और प्राकृतिक सुंदरता की खोज के लिए तैयार हैं? मैं यहां मदद के लिए हूं!",
            "Smart Tour Jharkhand में आपका स्वागत है! मैं आपको आदिवासी विरासत, वन्यजीव और सांस्कृतिक अनुभवों की खोज में सहायता कर सकता हूं।",
        ],
    ),
    (
        IntentCategory::Help,
        &[
            "मैं आपकी इन चीजों में मदद कर सकता हूं:",
            "• झारखंड के आदिवासी आकर्षण और सांस्कृतिक स्थल",
            "• झारखंड भर में व्यक्तिगत यात्रा योजना",
            "• आदिवासी होमस्टे और इको-लॉज बुकिंग",
            "• स्थानीय आदिवासी सुझाव और सांस्कृतिक अंतर्दृष्टि",
            "• झारखंड के भीतर परिवहन",
            "• आदिवासी भाषा सहायता (संथाली, हो, मुंडारी)",
            "• वन्यजीव और प्रकृति अनुभव",
            "आप झारखंड में क्या खोजना चाहते हैं?",
        ],
    ),
    (
        IntentCategory::Attractions,
        &[
            "यहां झारखंड के अवश्य देखने योग्य आकर्षण हैं:",
            "• बेतला राष्ट्रीय उद्यान - वन्यजीव सफारी और बाघ देखना",
            "• हजारीबाग वन्यजीव अभयारण्य - पक्षी देखने का स्वर्ग",
            "• नेतरहाट हिल स्टेशन - छोटानागपुर की रानी",
            "• रांची - झरनों और मंदिरों के साथ राजधानी",
            "• जमशेदपुर - सुंदर पार्कों के साथ स्टील सिटी",
            "• आदिवासी गांव - प्रामाणिक सांस्कृतिक अनुभव",
            "• प्राचीन मंदिर और पुरातात्विक स्थल",
            "मुझे अपनी रुचियां बताएं और मैं झारखंड में देखने के लिए सबसे अच्छी जगहों की सिफारिश करूंगा!",
        ],
    ),
    (
        IntentCategory::Itinerary,
        &[
            "मैं आपकी यात्रा योजना बनाने में मदद करना चाहूंगा! सही योजना बनाने के लिए, मुझे जानना होगा:",
            "• आपका गंतव्य",
            "• यात्रा की तारीखें",
            "• यात्रियों की संख्या",
            "• आपकी रुचियां (संस्कृति, प्रकृति, रोमांच, भोजन, आदि)",
            "• बजट सीमा",
            "• यात्रा शैली (बजट, मध्यम, लक्जरी)",
            "एक बार जब आप ये विवरण प्रदान करेंगे, मैं आपके लिए एक व्यक्तिगत यात्रा योजना बनाऊंगा!",
        ],
    ),
    (
        IntentCategory::Restaurants,
        &[
            "मैं आपको सबसे अच्छे रेस्तरां खोजने में मदद कर सकता हूं! यहां मैं क्या सुझा सकता हूं:",
            "• स्थानीय आदिवासी व्यंजन और पारंपरिक व्यंजन",
            "• झारखंड के प्रामाणिक व्यंजन",
            "• स्थानीय बाजार और स्ट्रीट फूड",
            "• शाकाहारी और वीगन विकल्प",
            "• परिवार के अनुकूल प्रतिष्ठान",
            "• सुंदर दृश्यों वाले रेस्तरां",
            "आप किस प्रकार का भोजन अनुभव खोज रहे हैं?",
        ],
    ),
    (
        IntentCategory::Booking,
        &[
            "मैं आपको विभिन्न सेवाओं की बुकिंग में मदद कर सकता हूं:",
            "• होटल और आवास",
            "• टूर और गतिविधियां",
            "• परिवहन (उड़ानें, ट्रेनें, बसें)",
            "• रेस्तरां आरक्षण",
            "• इवेंट टिकट",
            "• स्थानीय अनुभव और कार्यशालाएं",
            "आप क्या बुक करना चाहते हैं? मैं आपको प्रक्रिया के माध्यम से मार्गदर्शन करूंगा!",
        ],
    ),
    (
        IntentCategory::Fallback,
        &[
            "मुझे यकीन नहीं है कि मैं इसे समझ गया हूं। क्या आप अपना प्रश्न फिर से बना सकते हैं?",
            "मैं यात्रा योजना, सुझाव और बुकिंग में मदद के लिए यहां हूं। आपको किस विशिष्ट जानकारी की आवश्यकता है?",
            "मुझे बताएं कि मैं आपकी यात्रा योजनाओं में कैसे मदद कर सकता हूं!",
        ],
    ),
];

const ES: CategoryLines = &[
    (
        IntentCategory::Greeting,
        &[
            "¡Hola! Soy tu asistente de Smart Tour. ¿Cómo puedo ayudarte a planificar tu viaje perfecto?",
            "¡Hola! ¿Listo para explorar destinos increíbles? ¡Estoy aquí para ayudar!",
            "¡Bienvenido a Smart Tour! Puedo ayudarte con la planificación de viajes, recomendaciones y más.",
        ],
    ),
    (
        IntentCategory::Help,
        &[
            "Puedo ayudarte con:",
            "• Encontrar atracciones y actividades",
            "• Planificar itinerarios personalizados",
            "• Reservar alojamientos y tours",
            "• Recomendaciones locales y consejos",
            "• Información de transporte",
            "• Perspectivas culturales y ayuda con idiomas",
            "¿Qué te gustaría saber?",
        ],
    ),
    (
        IntentCategory::Attractions,
        &[
            "Aquí tienes algunas atracciones populares que puedo ayudarte a descubrir:",
            "• Monumentos históricos y lugares emblemáticos",
            "• Museos y centros culturales",
            "• Parques naturales y lugares pintorescos",
            "• Mercados locales y áreas de compras",
            "• Restaurantes y experiencias gastronómicas",
            "• Lugares de entretenimiento y espectáculos",
            "¡Dime tus intereses y te recomendaré los mejores lugares para visitar!",
        ],
    ),
    (
        IntentCategory::Itinerary,
        &[
            "¡Me encantaría ayudarte a planificar tu itinerario! Para crear el plan perfecto, necesito saber:",
            "• Tu destino",
            "• Fechas de viaje",
            "• Número de viajeros",
            "• Tus intereses (cultura, naturaleza, aventura, comida, etc.)",
            "• Rango de presupuesto",
            "• Estilo de viaje (económico, medio, lujo)",
            "¡Una vez que proporciones estos detalles, crearé un itinerario personalizado solo para ti!",
        ],
    ),
    (
        IntentCategory::Restaurants,
        &[
            "¡Puedo ayudarte a encontrar los mejores restaurantes! Aquí está lo que puedo recomendar:",
            "• Cocina local y platos tradicionales",
            "• Restaurantes de alta cocina y elegantes",
            "• Comida callejera y mercados locales",
            "• Opciones vegetarianas y veganas",
            "• Establecimientos familiares",
            "• Restaurantes con excelentes vistas o ambiente",
            "¿Qué tipo de experiencia gastronómica estás buscando?",
        ],
    ),
    (
        IntentCategory::Booking,
        &[
            "Puedo ayudarte a reservar varios servicios:",
            "• Hoteles y alojamientos",
            "• Tours y actividades",
            "• Transporte (vuelos, trenes, autobuses)",
            "• Reservas de restaurantes",
            "• Entradas para eventos",
            "• Experiencias locales y talleres",
            "¿Qué te gustaría reservar? ¡Te guiaré a través del proceso!",
        ],
    ),
    (
        IntentCategory::Fallback,
        &[
            "No estoy seguro de entender eso. ¿Podrías reformular tu pregunta?",
            "Estoy aquí para ayudar con la planificación de viajes, recomendaciones y reservas. ¿Qué información específica necesitas?",
            "¡Déjame saber cómo puedo ayudarte con tus planes de viaje!",
        ],
    ),
];

const FR: CategoryLines = &[
    (
        IntentCategory::Greeting,
        &[
            "Bonjour! Je suis votre assistant Smart Tour. Comment puis-je vous aider à planifier votre voyage parfait?",
            "Salut! Prêt à explorer des destinations incroyables? Je suis là pour vous aider!",
            "Bienvenue sur Smart Tour! Je peux vous aider avec la planification de voyages, les recommandations et plus encore.",
        ],
    ),
    (
        IntentCategory::Help,
        &[
            "Je peux vous aider avec:",
            "• Trouver des attractions et activités",
            "• Planifier des itinéraires personnalisés",
            "• Réserver des hébergements et visites",
            "• Recommandations locales et conseils",
            "• Informations de transport",
            "• Perspectives culturelles et aide linguistique",
            "Que souhaitez-vous savoir?",
        ],
    ),
    (
        IntentCategory::Attractions,
        &[
            "Voici quelques attractions populaires que je peux vous aider à découvrir:",
            "• Monuments historiques et sites emblématiques",
            "• Musées et centres culturels",
            "• Parcs naturels et sites pittoresques",
            "• Marchés locaux et zones de shopping",
            "• Restaurants et expériences gastronomiques",
            "• Lieux de divertissement et spectacles",
            "Dites-moi vos intérêts et je vous recommanderai les meilleurs endroits à visiter!",
        ],
    ),
    (
        IntentCategory::Itinerary,
        &[
            "J'aimerais vous aider à planifier votre itinéraire! Pour créer le plan parfait, j'ai besoin de savoir:",
            "• Votre destination",
            "• Dates de voyage",
            "• Nombre de voyageurs",
            "• Vos intérêts (culture, nature, aventure, nourriture, etc.)",
            "• Fourchette de budget",
            "• Style de voyage (budget, milieu de gamme, luxe)",
            "Une fois que vous fournirez ces détails, je créerai un itinéraire personnalisé juste pour vous!",
        ],
    ),
    (
        IntentCategory::Restaurants,
        &[
            "Je peux vous aider à trouver les meilleurs restaurants! Voici ce que je peux recommander:",
            "• Cuisine locale et plats traditionnels",
            "• Restaurants gastronomiques et haut de gamme",
            "• Nourriture de rue et marchés locaux",
            "• Options végétariennes et véganes",
            "• Établissements familiaux",
            "• Restaurants avec de belles vues ou atmosphère",
            "Quel type d'expérience culinaire recherchez-vous?",
        ],
    ),
    (
        IntentCategory::Booking,
        &[
            "Je peux vous aider à réserver divers services:",
            "• Hôtels et hébergements",
            "• Visites et activités",
            "• Transport (vols, trains, bus)",
            "• Réservations de restaurants",
            "• Billets d'événements",
            "• Expériences locales et ateliers",
            "Que souhaitez-vous réserver? Je vous guiderai à travers le processus!",
        ],
    ),
    (
        IntentCategory::Fallback,
        &[
            "Je ne suis pas sûr de comprendre cela. Pourriez-vous reformuler votre question?",
            "Je suis là pour aider avec la planification de voyages, les recommandations et les réservations. De quelle information spécifique avez-vous besoin?",
            "Laissez-moi savoir comment je peux vous aider avec vos plans de voyage!",
        ],
    ),
];
