//! Pre-mapped coordinates for major cities worldwide, so common inputs
//! resolve without any network round trip.

pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn city(name: &'static str, latitude: f64, longitude: f64) -> City {
    City {
        name,
        latitude,
        longitude,
    }
}

pub const CITIES: &[City] = &[
    // Italy
    city("Roma, Italia", 41.9028, 12.4964),
    city("Rome, Italy", 41.9028, 12.4964), // English alias
    city("Milano, Italia", 45.4642, 9.1900),
    city("Milan, Italy", 45.4642, 9.1900), // English alias
    city("Napoli, Italia", 40.8518, 14.2681),
    city("Naples, Italy", 40.8518, 14.2681), // English alias
    city("Torino, Italia", 45.0703, 7.6869),
    city("Turin, Italy", 45.0703, 7.6869), // English alias
    city("Palermo, Italia", 38.1157, 13.3615),
    city("Firenze, Italia", 43.7696, 11.2558),
    city("Florence, Italy", 43.7696, 11.2558), // English alias
    city("Bologna, Italia", 44.4949, 11.3426),
    city("Venezia, Italia", 45.4408, 12.3155),
    city("Venice, Italy", 45.4408, 12.3155), // English alias
    city("Genova, Italia", 44.4056, 8.9463),
    city("Bari, Italia", 41.1176, 16.8728),
    city("Catania, Italia", 37.4979, 15.0873),
    city("Messina, Italia", 38.1939, 15.5565),
    city("Verona, Italia", 45.4386, 10.9916),
    city("Padova, Italia", 45.4064, 11.8768),
    city("Trieste, Italia", 45.6452, 13.7777),
    city("Brescia, Italia", 45.5313, 10.2197),
    city("Parma, Italia", 44.8015, 10.3279),
    city("Modena, Italia", 44.6471, 10.9252),
    city("Pisa, Italia", 43.7228, 10.4016),
    city("Siena, Italia", 43.3186, 11.9314),
    city("Lecce, Italia", 40.3539, 18.1716),
    city("Salerno, Italia", 40.6861, 14.7664),
    city("Perugia, Italia", 43.1122, 12.3900),
    city("Ancona, Italia", 43.6159, 13.5007),
    city("Ravenna, Italia", 44.4169, 12.1939),
    city("Rimini, Italia", 44.0571, 12.5674),
    city("Benevento, Italia", 41.1393, 14.7810),
    city("Cagliari, Italia", 39.2238, 9.1217),
    city("Sassari, Italia", 40.7272, 8.5597),
    city("Reggio Calabria, Italia", 38.1156, 15.6564),
    // France
    city("Paris, France", 48.8566, 2.3522),
    city("Lyon, France", 45.7640, 4.8357),
    city("Marseille, France", 43.2965, 5.3698),
    city("Nice, France", 43.7102, 7.2620),
    city("Toulouse, France", 43.6047, 1.4442),
    city("Nantes, France", 47.2184, -1.5536),
    city("Strasbourg, France", 48.5734, 7.7521),
    city("Bordeaux, France", 44.8378, -0.5792),
    city("Lille, France", 50.6292, 3.0573),
    city("Rennes, France", 48.1113, -1.6800),
    city("Le Havre, France", 49.4944, 0.1079),
    city("Grenoble, France", 45.1885, 5.7245),
    // Spain
    city("Madrid, España", 40.4168, -3.7038),
    city("Barcelona, España", 41.3851, 2.1734),
    city("Valencia, España", 39.4699, -0.3763),
    city("Sevilla, España", 37.3891, -5.9845),
    city("Bilbao, España", 43.2633, -2.9349),
    city("Málaga, España", 36.7201, -4.4203),
    city("Zaragoza, España", 41.6488, -0.8891),
    city("Córdoba, España", 37.8882, -4.7794),
    city("Murcia, España", 37.9922, -1.1307),
    city("Palma de Mallorca, España", 39.5696, 2.6502),
    // Germany
    city("Berlin, Germany", 52.5200, 13.4050),
    city("Munich, Germany", 48.1351, 11.5820),
    city("Hamburg, Germany", 53.5511, 9.9937),
    city("Frankfurt, Germany", 50.1109, 8.6821),
    city("Cologne, Germany", 50.9375, 6.9603),
    city("Stuttgart, Germany", 48.7758, 9.1829),
    city("Düsseldorf, Germany", 51.2277, 6.7735),
    city("Dortmund, Germany", 51.5141, 7.4653),
    city("Essen, Germany", 51.4556, 7.0116),
    // UK and Ireland
    city("London, UK", 51.5074, -0.1278),
    city("Manchester, UK", 53.4808, -2.2426),
    city("Edinburgh, UK", 55.9533, -3.1883),
    city("Liverpool, UK", 53.4084, -2.9916),
    city("Glasgow, UK", 55.8642, -4.2518),
    city("Birmingham, UK", 52.5086, -1.8755),
    city("Leeds, UK", 53.8008, -1.5491),
    city("Bristol, UK", 51.4545, -2.5879),
    city("Dublin, Ireland", 53.3498, -6.2603),
    // Scandinavia and the Baltics
    city("Stockholm, Sweden", 59.3293, 18.0686),
    city("Copenhagen, Denmark", 55.6761, 12.5683),
    city("Oslo, Norway", 59.9139, 10.7522),
    city("Helsinki, Finland", 60.1695, 24.9354),
    city("Gothenburg, Sweden", 57.7089, 11.9746),
    city("Bergen, Norway", 60.3894, 5.3300),
    city("Malmö, Sweden", 55.6050, 13.0038),
    city("Tallinn, Estonia", 59.4370, 24.7536),
    // Central and Eastern Europe
    city("Prague, Czech Republic", 50.0755, 14.4378),
    city("Budapest, Hungary", 47.4979, 19.0402),
    city("Warsaw, Poland", 52.2297, 21.0122),
    city("Vienna, Austria", 48.2082, 16.3738),
    city("Kraków, Poland", 50.0647, 19.9450),
    city("Wrocław, Poland", 51.1079, 17.0385),
    city("Bucharest, Romania", 44.4268, 26.1025),
    city("Belgrade, Serbia", 44.8176, 20.4633),
    city("Sofia, Bulgaria", 42.6977, 23.3219),
    city("Athens, Greece", 37.9838, 23.7275),
    city("Bratislava, Slovakia", 48.1486, 17.1077),
    city("Ljubljana, Slovenia", 46.0569, 14.5058),
    city("Zagreb, Croatia", 45.8150, 15.9819),
    city("Riga, Latvia", 56.9496, 24.1052),
    city("Vilnius, Lithuania", 54.6872, 25.2797),
    // Southern and Mediterranean Europe, Middle East
    city("Thessaloniki, Greece", 40.6401, 22.9444),
    city("Istanbul, Turkey", 41.0082, 28.9784),
    city("Lisbon, Portugal", 38.7223, -9.1393),
    city("Porto, Portugal", 41.1579, -8.6291),
    city("Split, Croatia", 43.5081, 16.4402),
    city("Dubrovnik, Croatia", 42.6412, 18.1093),
    city("Valletta, Malta", 35.8989, 14.5146),
    city("Nicosia, Cyprus", 35.1856, 33.3823),
    city("Chania, Crete, Greece", 35.3387, 24.4615),
    city("Ankara, Turkey", 39.9334, 32.8597),
    city("Izmir, Turkey", 38.4161, 27.1302),
    city("Antalya, Turkey", 36.9124, 30.5597),
    city("Beirut, Lebanon", 33.8869, 35.4955),
    city("Damascus, Syria", 33.5138, 36.2765),
    city("Baghdad, Iraq", 33.3128, 44.3615),
    city("Tehran, Iran", 35.6892, 51.3890),
    city("Amman, Jordan", 31.9454, 35.9284),
    city("Cairo, Egypt", 30.0444, 31.2357),
    city("Alexandria, Egypt", 31.2001, 29.9187),
    city("Zadar, Croatia", 23.1291, 113.2644),
    city("Tirana, Albania", 41.3275, 19.8187),
    city("Pristina, Kosovo", 42.6726, 21.1789),
    city("Skopje, North Macedonia", 41.9973, 21.4280),
    city("Podgorica, Montenegro", 42.4304, 19.2594),
    city("Giza, Egypt", 30.0131, 31.2089),
    // USA
    city("New York, USA", 40.7128, -74.0060),
    city("Los Angeles, USA", 34.0522, -118.2437),
    city("Chicago, USA", 41.8781, -87.6298),
    city("Washington DC, USA", 38.9072, -77.0369),
    city("Washington, USA", 38.9072, -77.0369), // Alias for Washington DC
    city("Houston, USA", 29.7604, -95.3698),
    city("San Francisco, USA", 37.7749, -122.4194),
    city("Phoenix, USA", 33.4484, -112.0742),
    city("Philadelphia, USA", 39.9526, -75.1652),
    city("San Antonio, USA", 29.4241, -98.4936),
    city("San Diego, USA", 32.7157, -117.1611),
    city("Dallas, USA", 32.7767, -96.7970),
    city("Austin, USA", 30.2672, -97.7431),
    city("Seattle, USA", 47.6062, -122.3321),
    city("Denver, USA", 39.7392, -104.9903),
    city("Boston, USA", 42.3601, -71.0589),
    city("Miami, USA", 25.7617, -80.1918),
    city("Atlanta, USA", 33.7490, -84.3880),
    city("Las Vegas, USA", 36.1699, -115.1398),
    city("Portland, USA", 45.5152, -122.6784),
    city("Detroit, USA", 42.3314, -83.0458),
    city("Minneapolis, USA", 44.9778, -93.2650),
    city("Nashville, USA", 36.1627, -86.7816),
    city("Charlotte, USA", 35.2271, -80.8431),
    city("Memphis, USA", 35.1495, -90.0490),
    city("Baltimore, USA", 39.2904, -76.6122),
    city("New Orleans, USA", 29.9511, -90.2623),
    city("Milwaukee, USA", 43.0389, -87.9065),
    city("Albuquerque, USA", 35.0844, -106.6504),
    city("Tucson, USA", 32.2226, -110.9747),
    city("Fresno, USA", 36.7469, -119.7726),
    city("Sacramento, USA", 38.5816, -121.4944),
    city("Long Beach, USA", 33.7701, -118.1937),
    city("Kansas City, USA", 39.0997, -94.5786),
    city("Mesa, USA", 33.4152, -111.8313),
    city("Virginia Beach, USA", 36.8529, -75.9780),
    city("Columbus, USA", 39.9612, -82.9988),
    // Canada
    city("Toronto, Canada", 43.6532, -79.3832),
    city("Vancouver, Canada", 49.2827, -123.1207),
    city("Montreal, Canada", 45.5017, -73.5673),
    city("Calgary, Canada", 51.0447, -114.0719),
    city("Ottawa, Canada", 45.4215, -75.6972),
    city("Winnipeg, Canada", 49.8951, -97.1384),
    // Mexico
    city("Mexico City, Mexico", 19.4326, -99.1332),
    city("Guadalajara, Mexico", 20.6596, -103.2494),
    city("Monterrey, Mexico", 25.6866, -100.3161),
    city("Cancún, Mexico", 21.1629, -86.8527),
    city("Playa del Carmen, Mexico", 20.6296, -87.0739),
    city("Puerto Vallarta, Mexico", 20.6134, -105.2542),
    city("Acapulco, Mexico", 16.8634, -99.8901),
    city("Merida, Mexico", 20.9674, -89.6238),
    // Central America
    city("San José, Costa Rica", 9.9281, -84.0907),
    city("Panama City, Panama", 8.9824, -79.5199),
    city("San Salvador, El Salvador", 13.6929, -89.2182),
    city("Tegucigalpa, Honduras", 14.0723, -87.1921),
    city("Guatemala City, Guatemala", 14.6343, -90.5069),
    city("Belmopan, Belize", 17.2506, -88.7713),
    // Caribbean
    city("Havana, Cuba", 23.1136, -82.3666),
    city("San Juan, Puerto Rico", 18.4861, -69.9312),
    city("Santo Domingo, Dominican Republic", 18.4861, -69.9312),
    city("Kingston, Jamaica", 17.9826, -76.8103),
    city("Port-au-Prince, Haiti", 18.9712, -72.2852),
    city("Bridgetown, Barbados", 13.1938, -59.5432),
    // South America
    city("São Paulo, Brazil", -23.5505, -46.6333),
    city("Rio de Janeiro, Brazil", -22.9068, -43.1729),
    city("Salvador, Brazil", -12.9714, -38.5014),
    city("Brasília, Brazil", -15.7975, -47.8919),
    city("Buenos Aires, Argentina", -34.6037, -58.3816),
    city("Córdoba, Argentina", -31.4135, -64.1811),
    city("Rosario, Argentina", -32.9468, -60.6393),
    city("Santiago, Chile", -33.4489, -70.6693),
    city("Valparaíso, Chile", -33.0458, -71.6127),
    city("Lima, Peru", -12.0463, -77.0423),
    city("Arequipa, Peru", -16.3988, -71.5350),
    city("Bogotá, Colombia", 4.7110, -74.0055),
    city("Medellín, Colombia", 6.2442, -75.5812),
    city("Caracas, Venezuela", 10.4806, -66.9036),
    city("La Paz, Bolivia", -16.2902, -63.5887),
    city("Belo Horizonte, Brazil", -19.9191, -43.9386),
    city("Fortaleza, Brazil", -3.7319, -38.5267),
    city("Recife, Brazil", -8.0476, -34.8770),
    city("Manaus, Brazil", -3.1190, -60.0217),
    city("Curitiba, Brazil", -25.4284, -49.2733),
    city("Quito, Ecuador", -0.2299, -78.5099),
    city("Guayaquil, Ecuador", -2.1896, -79.8856),
    city("Asunción, Paraguay", -25.2637, -57.5759),
    city("Montevideo, Uruguay", -34.9011, -56.1645),
    city("Barranquilla, Colombia", 10.9639, -74.7964),
    // East Asia
    city("Tokyo, Japan", 35.6762, 139.6503),
    city("Osaka, Japan", 34.6937, 135.5023),
    city("Kyoto, Japan", 35.0116, 135.7681),
    city("Yokohama, Japan", 35.4437, 139.6380),
    city("Beijing, China", 39.9042, 116.4074),
    city("Shanghai, China", 31.2304, 121.4737),
    city("Guangzhou, China", 23.1291, 113.2644),
    city("Chongqing, China", 29.4316, 106.9123),
    city("Hong Kong, China", 22.3193, 114.1694),
    city("Seoul, South Korea", 37.5665, 126.9780),
    city("Busan, South Korea", 35.1796, 129.0756),
    city("Taipei, Taiwan", 25.0330, 121.5654),
    city("Bangkok, Thailand", 13.7563, 100.5018),
    city("Ho Chi Minh City, Vietnam", 10.8231, 106.6297),
    city("Hanoi, Vietnam", 21.0285, 105.8542),
    city("Xi'an, China", 34.3416, 108.9398),
    city("Nanjing, China", 32.0603, 118.7969),
    city("Hangzhou, China", 30.2741, 120.1551),
    city("Shenzhen, China", 22.5431, 114.0579),
    city("Sapporo, Japan", 43.0642, 141.3469),
    // Southeast Asia
    city("Singapore, Singapore", 1.3521, 103.8198),
    city("Manila, Philippines", 14.5995, 120.9842),
    city("Davao, Philippines", 7.0731, 125.6126),
    city("Kuala Lumpur, Malaysia", 3.1390, 101.6869),
    city("George Town, Malaysia", 5.4164, 100.3327),
    city("Jakarta, Indonesia", -6.2088, 106.8456),
    city("Surabaya, Indonesia", -7.2575, 112.7521),
    city("Yangon, Myanmar", 16.8661, 96.1951),
    city("Phnom Penh, Cambodia", 11.5564, 104.9282),
    city("Vientiane, Laos", 17.9757, 102.6331),
    city("Cebu, Philippines", 10.3157, 123.8854),
    city("Bandung, Indonesia", -6.9175, 107.6062),
    city("Penang, Malaysia", 5.3667, 100.3036),
    city("Chiang Mai, Thailand", 18.7883, 98.9853),
    city("Da Nang, Vietnam", 16.0544, 108.2022),
    // South Asia
    city("Delhi, India", 28.7041, 77.1025),
    city("Mumbai, India", 19.0760, 72.8777),
    city("Bangalore, India", 12.9716, 77.5946),
    city("Kolkata, India", 22.5726, 88.3639),
    city("Chennai, India", 13.0827, 80.2707),
    city("Hyderabad, India", 17.3850, 78.4867),
    city("Lahore, Pakistan", 31.5497, 74.3436),
    city("Karachi, Pakistan", 24.8607, 67.0011),
    city("Dhaka, Bangladesh", 23.8103, 90.4125),
    city("Colombo, Sri Lanka", 6.9271, 80.7580),
    city("Kathmandu, Nepal", 27.7172, 85.3240),
    city("Thimphu, Bhutan", 27.5142, 89.6432),
    // Gulf states
    city("Dubai, United Arab Emirates", 25.2048, 55.2708),
    city("Abu Dhabi, United Arab Emirates", 24.4539, 54.3773),
    city("Doha, Qatar", 25.2854, 51.5310),
    city("Riyadh, Saudi Arabia", 24.7136, 46.6753),
    city("Jeddah, Saudi Arabia", 21.5433, 39.1728),
    city("Muscat, Oman", 23.6085, 58.5400),
    city("Kuwait City, Kuwait", 29.3759, 47.9774),
    // Central Asia
    city("Almaty, Kazakhstan", 43.2380, 76.9502),
    city("Astana, Kazakhstan", 51.1694, 71.4491),
    city("Tashkent, Uzbekistan", 41.2995, 69.2401),
    city("Samarkand, Uzbekistan", 39.6548, 66.9597),
    city("Bishkek, Kyrgyzstan", 42.8746, 74.5698),
    city("Dushanbe, Tajikistan", 38.5598, 68.7738),
    // Africa
    city("Lagos, Nigeria", 6.5244, 3.3792),
    city("Abuja, Nigeria", 9.0765, 7.3986),
    city("Johannesburg, South Africa", -26.2023, 28.0436),
    city("Cape Town, South Africa", -33.9249, 18.4241),
    city("Nairobi, Kenya", -1.2921, 36.8219),
    city("Kampala, Uganda", 0.3476, 32.5825),
    city("Dar es Salaam, Tanzania", -6.7924, 39.2083),
    city("Harare, Zimbabwe", -17.8252, 31.0335),
    city("Accra, Ghana", 5.6037, -0.1870),
    city("Casablanca, Morocco", 33.5731, -7.5898),
    city("Marrakesh, Morocco", 31.6295, -8.0100),
    city("Dakar, Senegal", 14.6928, -17.0467),
    city("Addis Ababa, Ethiopia", 9.0320, 38.7469),
    // Australia
    city("Sydney, Australia", -33.8688, 151.2093),
    city("Melbourne, Australia", -37.8136, 144.9631),
    city("Brisbane, Australia", -27.4698, 153.0251),
    city("Perth, Australia", -31.9505, 115.8605),
    city("Adelaide, Australia", -34.9285, 138.5999),
    city("Hobart, Australia", -42.8821, 147.3272),
    city("Canberra, Australia", -35.2809, 149.1300),
    city("Gold Coast, Australia", -28.0028, 153.4314),
    // New Zealand
    city("Auckland, New Zealand", -37.7870, 174.7669),
    city("Wellington, New Zealand", -41.2865, 174.7762),
    // Pacific islands
    city("Honolulu, Hawaii, USA", 21.3099, -157.8581),
    city("Suva, Fiji", -18.1248, 178.4501),
    city("Apia, Samoa", -13.8330, -171.7373),
    city("Nadi, Fiji", -17.7832, 177.4474),
    city("Papeete, French Polynesia", -17.5334, -149.5671),
];
