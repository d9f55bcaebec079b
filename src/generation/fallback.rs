//! Curated content used whenever generation fails or returns unusable output.
//! Fallback vocabulary is written for Spanish, the default target language.

use chrono::{DateTime, Utc};
use crate::curriculum::FocusCategory;
use crate::generation::content::Story;
use crate::review::VocabularyItem;

/// (english, spanish, pronunciation, example)
type Word = (&'static str, &'static str, &'static str, &'static str);

/// Each week holds 42 words, enough for a whole week of fallback lessons.
const WEEK_WORDS: [&[Word]; 12] = [
    &[
        ("hello", "hola", "OH-lah", "Hola, me llamo Ana."),
        ("goodbye", "adiós", "ah-DYOHS", "Adiós, hasta mañana."),
        ("please", "por favor", "por fah-VOR", "Un café, por favor."),
        ("thank you", "gracias", "GRAH-syahs", "Muchas gracias por todo."),
        ("name", "nombre", "NOHM-breh", "¿Cuál es tu nombre?"),
        ("friend", "amigo", "ah-MEE-goh", "Él es mi amigo Pedro."),
        ("good morning", "buenos días", "BWEH-nohs DEE-ahs", "Buenos días, señora."),
        ("good night", "buenas noches", "BWEH-nahs NOH-chehs", "Buenas noches a todos."),
        ("nice to meet you", "mucho gusto", "MOO-choh GOOS-toh", "Mucho gusto, soy Luis."),
        ("welcome", "bienvenido", "byehn-veh-NEE-doh", "Bienvenido a mi casa."),
        ("yes", "sí", "see", "Sí, soy de Chile."),
        ("no", "no", "noh", "No, no soy de aquí."),
        ("sorry", "perdón", "pehr-DOHN", "Perdón, no entiendo."),
        ("excuse me", "disculpe", "dees-KOOL-peh", "Disculpe, ¿dónde está la estación?"),
        ("good afternoon", "buenas tardes", "BWEH-nahs TAR-dehs", "Buenas tardes, profesora."),
        ("see you later", "hasta luego", "AHS-tah LWEH-goh", "Hasta luego, Marta."),
        ("see you soon", "hasta pronto", "AHS-tah PROHN-toh", "Nos vemos, hasta pronto."),
        ("how are you", "cómo estás", "KOH-moh ehs-TAHS", "Hola Pablo, ¿cómo estás?"),
        ("well", "bien", "byehn", "Estoy bien, gracias."),
        ("man", "hombre", "OHM-breh", "Ese hombre es muy simpático."),
        ("woman", "mujer", "moo-HEHR", "La mujer habla tres idiomas."),
        ("boy", "chico", "CHEE-koh", "El chico se llama Tomás."),
        ("girl", "chica", "CHEE-kah", "La chica es de Perú."),
        ("surname", "apellido", "ah-peh-YEE-doh", "Mi apellido es García."),
        ("age", "edad", "eh-DAHD", "¿Qué edad tienes?"),
        ("country", "país", "pah-EES", "Mi país es pequeño."),
        ("city", "ciudad", "syoo-DAHD", "Vivo en una ciudad grande."),
        ("language", "idioma", "ee-DYOH-mah", "El español es un idioma bonito."),
        ("to speak", "hablar", "ah-BLAR", "Quiero hablar español."),
        ("to live", "vivir", "vee-VEER", "Me gustaría vivir en Sevilla."),
        ("to be called", "llamarse", "yah-MAR-seh", "Mi perro va a llamarse Toby."),
        ("sir", "señor", "seh-NYOR", "Buenos días, señor López."),
        ("madam", "señora", "seh-NYOH-rah", "La señora Ruiz es muy amable."),
        ("miss", "señorita", "seh-nyoh-REE-tah", "La señorita trabaja aquí."),
        ("address", "dirección", "dee-rehk-SYOHN", "Mi dirección es calle Mayor, 5."),
        ("phone number", "número de teléfono", "NOO-meh-roh deh teh-LEH-foh-noh", "¿Me das tu número de teléfono?"),
        ("email", "correo electrónico", "koh-RREH-oh eh-lehk-TROH-nee-koh", "Te mando un correo electrónico."),
        ("student", "estudiante", "ehs-too-DYAHN-teh", "Soy estudiante de medicina."),
        ("teacher", "profesor", "proh-feh-SOR", "El profesor es muy paciente."),
        ("nationality", "nacionalidad", "nah-syoh-nah-lee-DAHD", "¿Cuál es tu nacionalidad?"),
        ("to introduce", "presentar", "preh-sehn-TAR", "Te quiero presentar a mi amiga."),
        ("delighted", "encantado", "ehn-kahn-TAH-doh", "Encantado de conocerte."),
    ],
    &[
        ("mother", "madre", "MAH-dreh", "Mi madre es profesora."),
        ("father", "padre", "PAH-dreh", "Mi padre cocina muy bien."),
        ("brother", "hermano", "ehr-MAH-noh", "Mi hermano tiene diez años."),
        ("sister", "hermana", "ehr-MAH-nah", "Mi hermana vive en Madrid."),
        ("son", "hijo", "EE-hoh", "Su hijo juega al fútbol."),
        ("daughter", "hija", "EE-hah", "La hija de Marta estudia mucho."),
        ("grandfather", "abuelo", "ah-BWEH-loh", "Mi abuelo cuenta historias."),
        ("grandmother", "abuela", "ah-BWEH-lah", "La abuela hace pan."),
        ("family", "familia", "fah-MEE-lyah", "Mi familia es grande."),
        ("cousin", "primo", "PREE-moh", "Mi primo vive en México."),
        ("husband", "esposo", "ehs-POH-soh", "Mi esposo trabaja en un banco."),
        ("wife", "esposa", "ehs-POH-sah", "Su esposa es médica."),
        ("uncle", "tío", "TEE-oh", "Mi tío vive en el campo."),
        ("aunt", "tía", "TEE-ah", "Mi tía hace pasteles."),
        ("nephew", "sobrino", "soh-BREE-noh", "Mi sobrino tiene tres años."),
        ("niece", "sobrina", "soh-BREE-nah", "Mi sobrina canta muy bien."),
        ("grandson", "nieto", "NYEH-toh", "El nieto visita a su abuela."),
        ("granddaughter", "nieta", "NYEH-tah", "Su nieta estudia en Madrid."),
        ("parents", "padres", "PAH-drehs", "Mis padres viven en Valencia."),
        ("siblings", "hermanos", "ehr-MAH-nohs", "Tengo dos hermanos."),
        ("baby", "bebé", "beh-BEH", "El bebé duerme mucho."),
        ("boyfriend", "novio", "NOH-vyoh", "Su novio es italiano."),
        ("girlfriend", "novia", "NOH-vyah", "Mi novia es profesora."),
        ("to get married", "casarse", "kah-SAR-seh", "Van a casarse en junio."),
        ("divorced", "divorciado", "dee-vor-SYAH-doh", "Mi vecino está divorciado."),
        ("single", "soltero", "sohl-TEH-roh", "Mi hermano está soltero."),
        ("married", "casado", "kah-SAH-doh", "Mi primo está casado."),
        ("relative", "pariente", "pah-RYEHN-teh", "Es un pariente lejano."),
        ("father-in-law", "suegro", "SWEH-groh", "Mi suegro es muy simpático."),
        ("mother-in-law", "suegra", "SWEH-grah", "Mi suegra cocina paella."),
        ("twin", "gemelo", "heh-MEH-loh", "Mi gemelo se llama Juan."),
        ("child", "niño", "NEE-nyoh", "El niño juega en el parque."),
        ("older", "mayor", "mah-YOR", "Mi hermana mayor vive sola."),
        ("younger", "menor", "meh-NOR", "Mi hermano menor estudia aún."),
        ("to love", "querer", "keh-REHR", "Te voy a querer siempre."),
        ("love", "amor", "ah-MOR", "El amor de una madre es grande."),
        ("together", "juntos", "HOON-tohs", "Comemos juntos los domingos."),
        ("to visit", "visitar", "vee-see-TAR", "Voy a visitar a mis abuelos."),
        ("partner", "pareja", "pah-REH-hah", "Mi pareja es de Chile."),
        ("cousin (female)", "prima", "PREE-mah", "Mi prima tiene un gato."),
        ("stepmother", "madrastra", "mah-DRAHS-trah", "Su madrastra es muy cariñosa."),
        ("friendship", "amistad", "ah-mees-TAHD", "Nuestra amistad es muy fuerte."),
    ],
    &[
        ("bread", "pan", "pahn", "Compro pan cada mañana."),
        ("water", "agua", "AH-gwah", "Quiero un vaso de agua."),
        ("apple", "manzana", "mahn-SAH-nah", "La manzana es roja."),
        ("cheese", "queso", "KEH-soh", "Me gusta el queso fresco."),
        ("chicken", "pollo", "POH-yoh", "Cenamos pollo con arroz."),
        ("rice", "arroz", "ah-RROHS", "El arroz está caliente."),
        ("breakfast", "desayuno", "deh-sah-YOO-noh", "El desayuno es a las ocho."),
        ("dinner", "cena", "SEH-nah", "La cena está lista."),
        ("restaurant", "restaurante", "rehs-tow-RAHN-teh", "Vamos a un restaurante italiano."),
        ("bill", "cuenta", "KWEHN-tah", "La cuenta, por favor."),
        ("egg", "huevo", "WEH-voh", "Desayuno un huevo frito."),
        ("meat", "carne", "KAR-neh", "No como carne roja."),
        ("fish", "pescado", "pehs-KAH-doh", "El pescado está fresco."),
        ("vegetables", "verduras", "vehr-DOO-rahs", "Las verduras son sanas."),
        ("fruit", "fruta", "FROO-tah", "Como fruta cada día."),
        ("salt", "sal", "sahl", "Le falta sal a la sopa."),
        ("sugar", "azúcar", "ah-SOO-kar", "El café sin azúcar, por favor."),
        ("milk", "leche", "LEH-cheh", "Bebo leche con cereales."),
        ("coffee", "café", "kah-FEH", "Tomo un café con leche."),
        ("tea", "té", "teh", "Prefiero el té verde."),
        ("wine", "vino", "VEE-noh", "Una copa de vino tinto."),
        ("beer", "cerveza", "sehr-VEH-sah", "Una cerveza fría, por favor."),
        ("soup", "sopa", "SOH-pah", "La sopa está muy caliente."),
        ("salad", "ensalada", "ehn-sah-LAH-dah", "Quiero una ensalada mixta."),
        ("potato", "patata", "pah-TAH-tah", "La tortilla lleva patata."),
        ("tomato", "tomate", "toh-MAH-teh", "Corta el tomate en trozos."),
        ("onion", "cebolla", "seh-BOH-yah", "La cebolla me hace llorar."),
        ("orange", "naranja", "nah-RAHN-hah", "Un zumo de naranja natural."),
        ("lunch", "almuerzo", "ahl-MWEHR-soh", "El almuerzo es a las dos."),
        ("dessert", "postre", "POHS-treh", "De postre hay flan."),
        ("menu", "menú", "meh-NOO", "¿Nos trae el menú, por favor?"),
        ("waiter", "camarero", "kah-mah-REH-roh", "El camarero es muy rápido."),
        ("glass", "vaso", "VAH-soh", "El vaso está vacío."),
        ("plate", "plato", "PLAH-toh", "Este plato es típico de aquí."),
        ("fork", "tenedor", "teh-neh-DOR", "Me falta un tenedor."),
        ("knife", "cuchillo", "koo-CHEE-yoh", "El cuchillo corta bien."),
        ("spoon", "cuchara", "koo-CHAH-rah", "La sopa se come con cuchara."),
        ("to eat", "comer", "koh-MEHR", "Vamos a comer juntos."),
        ("to drink", "beber", "beh-BEHR", "Hay que beber mucha agua."),
        ("to cook", "cocinar", "koh-see-NAR", "Me encanta cocinar los sábados."),
        ("hunger", "hambre", "AHM-breh", "Tengo mucha hambre."),
        ("delicious", "delicioso", "deh-lee-SYOH-soh", "El pastel está delicioso."),
    ],
    &[
        ("to wake up", "despertarse", "dehs-pehr-TAR-seh", "Suelo despertarse a las siete."),
        ("to shower", "ducharse", "doo-CHAR-seh", "Prefiero ducharse por la noche."),
        ("to work", "trabajar", "trah-bah-HAR", "Voy a trabajar en autobús."),
        ("to sleep", "dormir", "dor-MEER", "Necesito dormir ocho horas."),
        ("morning", "mañana", "mah-NYAH-nah", "Corro por la mañana."),
        ("afternoon", "tarde", "TAR-deh", "Estudio por la tarde."),
        ("always", "siempre", "SYEHM-preh", "Siempre bebo café."),
        ("never", "nunca", "NOON-kah", "Nunca llego tarde."),
        ("early", "temprano", "tehm-PRAH-noh", "Me levanto temprano."),
        ("clock", "reloj", "rreh-LOH", "El reloj marca las nueve."),
        ("to get up", "levantarse", "leh-vahn-TAR-seh", "Es difícil levantarse en invierno."),
        ("to brush", "cepillarse", "seh-pee-YAR-seh", "Hay que cepillarse los dientes."),
        ("to get dressed", "vestirse", "vehs-TEER-seh", "Tarda mucho en vestirse."),
        ("to have breakfast", "desayunar", "deh-sah-yoo-NAR", "Me gusta desayunar tranquilo."),
        ("to have dinner", "cenar", "seh-NAR", "Solemos cenar a las nueve."),
        ("to go to bed", "acostarse", "ah-kohs-TAR-seh", "Ya es hora de acostarse."),
        ("night", "noche", "NOH-cheh", "Leo un poco cada noche."),
        ("day", "día", "DEE-ah", "Hoy es un buen día."),
        ("week", "semana", "seh-MAH-nah", "Trabajo cinco días a la semana."),
        ("hour", "hora", "OH-rah", "La clase dura una hora."),
        ("minute", "minuto", "mee-NOO-toh", "Espera un minuto, por favor."),
        ("usually", "normalmente", "nor-mahl-MEHN-teh", "Normalmente como en casa."),
        ("sometimes", "a veces", "ah VEH-sehs", "A veces voy en bici."),
        ("often", "a menudo", "ah meh-NOO-doh", "Vamos al cine a menudo."),
        ("later", "luego", "LWEH-goh", "Luego te llamo."),
        ("afterwards", "después", "dehs-PWEHS", "Después de comer descanso."),
        ("before", "antes", "AHN-tehs", "Antes de dormir leo."),
        ("to study", "estudiar", "ehs-too-DYAR", "Tengo que estudiar esta tarde."),
        ("homework", "deberes", "deh-BEH-rehs", "Los niños hacen los deberes."),
        ("teeth", "dientes", "DYEHN-tehs", "Me lavo los dientes tres veces."),
        ("towel", "toalla", "toh-AH-yah", "La toalla está en el baño."),
        ("soap", "jabón", "hah-BOHN", "Lávate las manos con jabón."),
        ("alarm clock", "despertador", "dehs-pehr-tah-DOR", "El despertador suena a las seis."),
        ("bus", "autobús", "ow-toh-BOOS", "El autobús llega tarde."),
        ("to arrive", "llegar", "yeh-GAR", "Quiero llegar a tiempo."),
        ("to go out", "salir", "sah-LEER", "Vamos a salir esta noche."),
        ("to come back", "volver", "vohl-VEHR", "Suelo volver a casa a las seis."),
        ("to walk", "caminar", "kah-mee-NAR", "Me gusta caminar por el parque."),
        ("to wash", "lavar", "lah-VAR", "Tengo que lavar la ropa."),
        ("to comb one's hair", "peinarse", "pay-NAR-seh", "Tarda mucho en peinarse."),
        ("routine", "rutina", "rroo-TEE-nah", "Mi rutina es muy sencilla."),
        ("to start", "empezar", "ehm-peh-SAR", "La clase va a empezar."),
    ],
    &[
        ("train", "tren", "trehn", "El tren sale a las diez."),
        ("airport", "aeropuerto", "ah-eh-roh-PWEHR-toh", "El aeropuerto está lejos."),
        ("ticket", "billete", "bee-YEH-teh", "Necesito un billete de ida."),
        ("street", "calle", "KAH-yeh", "La calle es muy larga."),
        ("left", "izquierda", "ees-KYEHR-dah", "Gira a la izquierda."),
        ("right", "derecha", "deh-REH-chah", "El hotel está a la derecha."),
        ("map", "mapa", "MAH-pah", "¿Tienes un mapa de la ciudad?"),
        ("suitcase", "maleta", "mah-LEH-tah", "Mi maleta es azul."),
        ("hotel", "hotel", "oh-TEHL", "El hotel tiene piscina."),
        ("near", "cerca", "SEHR-kah", "La estación está cerca."),
        ("station", "estación", "ehs-tah-SYOHN", "La estación está cerca."),
        ("bus stop", "parada", "pah-RAH-dah", "La parada está en la esquina."),
        ("passport", "pasaporte", "pah-sah-POR-teh", "No olvides el pasaporte."),
        ("flight", "vuelo", "VWEH-loh", "El vuelo sale a las ocho."),
        ("plane", "avión", "ah-VYOHN", "El avión llega a Lima."),
        ("car", "coche", "KOH-cheh", "Alquilamos un coche."),
        ("taxi", "taxi", "TAHK-see", "Tomamos un taxi al hotel."),
        ("boat", "barco", "BAR-koh", "El barco cruza el río."),
        ("bridge", "puente", "PWEHN-teh", "Cruza el puente y gira."),
        ("square", "plaza", "PLAH-sah", "Nos vemos en la plaza."),
        ("corner", "esquina", "ehs-KEE-nah", "El banco está en la esquina."),
        ("straight ahead", "todo recto", "TOH-doh RREHK-toh", "Siga todo recto dos calles."),
        ("far", "lejos", "LEH-hohs", "El museo está lejos."),
        ("north", "norte", "NOR-teh", "Vivo en el norte de España."),
        ("south", "sur", "soor", "El sur es muy soleado."),
        ("east", "este", "EHS-teh", "El sol sale por el este."),
        ("west", "oeste", "oh-EHS-teh", "El pueblo está al oeste."),
        ("beach", "playa", "PLAH-yah", "La playa está a cinco minutos."),
        ("to travel", "viajar", "vyah-HAR", "Me encanta viajar en tren."),
        ("trip", "viaje", "VYAH-heh", "¡Buen viaje!"),
        ("tourist", "turista", "too-REES-tah", "El turista pide un mapa."),
        ("luggage", "equipaje", "eh-kee-PAH-heh", "El equipaje pesa mucho."),
        ("booking", "reserva", "rreh-SEHR-vah", "Tengo una reserva a mi nombre."),
        ("room", "habitación", "ah-bee-tah-SYOHN", "La habitación tiene vistas."),
        ("exit", "salida", "sah-LEE-dah", "La salida está a la izquierda."),
        ("arrival", "llegada", "yeh-GAH-dah", "La llegada es a las diez."),
        ("platform", "andén", "ahn-DEHN", "El tren sale del andén dos."),
        ("to get lost", "perderse", "pehr-DEHR-seh", "Es fácil perderse aquí."),
        ("border", "frontera", "frohn-TEH-rah", "Cruzamos la frontera en coche."),
        ("guide", "guía", "GEE-ah", "La guía habla inglés."),
        ("traffic light", "semáforo", "seh-MAH-foh-roh", "Gira en el semáforo."),
        ("museum", "museo", "moo-SEH-oh", "El museo abre los lunes."),
    ],
    &[
        ("money", "dinero", "dee-NEH-roh", "No tengo mucho dinero."),
        ("price", "precio", "PREH-syoh", "¿Cuál es el precio?"),
        ("cheap", "barato", "bah-RAH-toh", "Este libro es barato."),
        ("expensive", "caro", "KAH-roh", "El reloj es muy caro."),
        ("shop", "tienda", "TYEHN-dah", "La tienda abre a las nueve."),
        ("to buy", "comprar", "kohm-PRAR", "Quiero comprar zapatos."),
        ("to pay", "pagar", "pah-GAR", "Puedo pagar con tarjeta."),
        ("size", "talla", "TAH-yah", "¿Tiene una talla más grande?"),
        ("market", "mercado", "mehr-KAH-doh", "El mercado tiene fruta fresca."),
        ("receipt", "recibo", "rreh-SEE-boh", "Guarda el recibo."),
        ("credit card", "tarjeta de crédito", "tar-HEH-tah deh KREH-dee-toh", "¿Puedo pagar con tarjeta de crédito?"),
        ("cash", "efectivo", "eh-fehk-TEE-voh", "Solo aceptan efectivo."),
        ("discount", "descuento", "dehs-KWEHN-toh", "Hay un descuento del diez por ciento."),
        ("sales", "rebajas", "rreh-BAH-hahs", "En enero hay rebajas."),
        ("customer", "cliente", "klee-EHN-teh", "El cliente siempre tiene razón."),
        ("cashier", "cajero", "kah-HEH-roh", "El cajero me da el cambio."),
        ("to sell", "vender", "behn-DEHR", "Quieren vender su coche."),
        ("to spend", "gastar", "gahs-TAR", "No quiero gastar demasiado."),
        ("to save", "ahorrar", "ah-oh-RRAR", "Intento ahorrar cada mes."),
        ("bank", "banco", "BAHN-koh", "El banco cierra a las dos."),
        ("coin", "moneda", "moh-NEH-dah", "Tengo una moneda de un euro."),
        ("bag", "bolsa", "BOHL-sah", "¿Necesita una bolsa?"),
        ("shoes", "zapatos", "sah-PAH-tohs", "Estos zapatos son cómodos."),
        ("shirt", "camisa", "kah-MEE-sah", "Me gusta esta camisa azul."),
        ("trousers", "pantalones", "pahn-tah-LOH-nehs", "Los pantalones son largos."),
        ("dress", "vestido", "vehs-TEE-doh", "El vestido es precioso."),
        ("coat", "abrigo", "ah-BREE-goh", "Necesito un abrigo nuevo."),
        ("colour", "color", "koh-LOR", "¿Lo tiene en otro color?"),
        ("to try on", "probarse", "proh-BAR-seh", "Es mejor probarse la ropa antes."),
        ("fitting room", "probador", "proh-bah-DOR", "El probador está al fondo."),
        ("change", "cambio", "KAHM-byoh", "Aquí tiene el cambio."),
        ("supermarket", "supermercado", "soo-pehr-mehr-KAH-doh", "Voy al supermercado."),
        ("bakery", "panadería", "pah-nah-deh-REE-ah", "La panadería abre temprano."),
        ("bookshop", "librería", "lee-breh-REE-ah", "Compro libros en la librería."),
        ("to cost", "costar", "kohs-TAR", "¿Cuánto va a costar?"),
        ("open", "abierto", "ah-BYEHR-toh", "El museo está abierto hoy."),
        ("closed", "cerrado", "seh-RRAH-doh", "El mercado está cerrado."),
        ("wallet", "cartera", "kar-TEH-rah", "Perdí mi cartera."),
        ("offer", "oferta", "oh-FEHR-tah", "Esta oferta es buena."),
        ("quality", "calidad", "kah-lee-DAHD", "La calidad es excelente."),
        ("queue", "cola", "KOH-lah", "Hay mucha cola en la caja."),
        ("to give back", "devolver", "deh-vohl-VEHR", "Quiero devolver esta camisa."),
    ],
    &[
        ("job", "trabajo", "trah-BAH-hoh", "Me gusta mi trabajo."),
        ("office", "oficina", "oh-fee-SEE-nah", "La oficina está en el centro."),
        ("boss", "jefe", "HEH-feh", "Mi jefe es amable."),
        ("meeting", "reunión", "rreh-oo-NYOHN", "La reunión empieza a las tres."),
        ("colleague", "colega", "koh-LEH-gah", "Mi colega me ayuda mucho."),
        ("salary", "sueldo", "SWEHL-doh", "El sueldo llega a fin de mes."),
        ("computer", "ordenador", "or-deh-nah-DOR", "Uso el ordenador todo el día."),
        ("interview", "entrevista", "ehn-treh-VEES-tah", "Tengo una entrevista mañana."),
        ("company", "empresa", "ehm-PREH-sah", "La empresa es pequeña."),
        ("schedule", "horario", "oh-RAH-ryoh", "Mi horario es flexible."),
        ("to hire", "contratar", "kohn-trah-TAR", "Van a contratar a dos personas."),
        ("contract", "contrato", "kohn-TRAH-toh", "Firmé el contrato ayer."),
        ("employee", "empleado", "ehm-pleh-AH-doh", "Cada empleado tiene un correo."),
        ("manager", "gerente", "heh-REHN-teh", "La gerente está en una reunión."),
        ("team", "equipo", "eh-KEE-poh", "Nuestro equipo es pequeño."),
        ("project", "proyecto", "proh-YEHK-toh", "El proyecto termina en mayo."),
        ("task", "tarea", "tah-REH-ah", "Tengo una tarea urgente."),
        ("report", "informe", "een-FOR-meh", "Escribo el informe hoy."),
        ("deadline", "plazo", "PLAH-soh", "El plazo acaba el viernes."),
        ("phone call", "llamada", "yah-MAH-dah", "Tengo una llamada a las diez."),
        ("holidays", "vacaciones", "vah-kah-SYOH-nehs", "En agosto tengo vacaciones."),
        ("career", "carrera", "kah-RREH-rah", "Su carrera es muy larga."),
        ("experience", "experiencia", "ehks-peh-RYEHN-syah", "Tengo experiencia en ventas."),
        ("skill", "habilidad", "ah-bee-lee-DAHD", "Es una habilidad útil."),
        ("to retire", "jubilarse", "hoo-bee-LAR-seh", "Quiere jubilarse pronto."),
        ("unemployed", "desempleado", "deh-sehm-pleh-AH-doh", "Estuvo desempleado un año."),
        ("lawyer", "abogado", "ah-boh-GAH-doh", "El abogado revisa el caso."),
        ("engineer", "ingeniero", "een-heh-NYEH-roh", "Mi tío es ingeniero."),
        ("nurse", "enfermero", "ehn-fehr-MEH-roh", "El enfermero trabaja de noche."),
        ("cook", "cocinero", "koh-see-NEH-roh", "El cocinero prepara la cena."),
        ("shift", "turno", "TOOR-noh", "Hoy tengo el turno de mañana."),
        ("desk", "escritorio", "ehs-kree-TOH-ryoh", "Mi escritorio está ordenado."),
        ("printer", "impresora", "eem-preh-SOH-rah", "La impresora no funciona."),
        ("business", "negocio", "neh-GOH-syoh", "Tiene un negocio propio."),
        ("to earn", "ganar", "gah-NAR", "Quiere ganar más dinero."),
        ("promotion", "ascenso", "ah-SEHN-soh", "Le dieron un ascenso."),
        ("training", "formación", "for-mah-SYOHN", "La formación dura un mes."),
        ("CV", "currículum", "koo-RREE-koo-loom", "Envía tu currículum hoy."),
        ("to resign", "dimitir", "dee-mee-TEER", "Decidió dimitir el lunes."),
        ("goal", "objetivo", "ohb-heh-TEE-voh", "Nuestro objetivo es crecer."),
        ("factory", "fábrica", "FAH-bree-kah", "La fábrica está fuera de la ciudad."),
        ("working day", "jornada", "hor-NAH-dah", "La jornada termina a las cinco."),
    ],
    &[
        ("head", "cabeza", "kah-BEH-sah", "Me duele la cabeza."),
        ("hand", "mano", "MAH-noh", "Levanta la mano."),
        ("doctor", "médico", "MEH-dee-koh", "El médico llega pronto."),
        ("medicine", "medicina", "meh-dee-SEE-nah", "Toma la medicina con agua."),
        ("fever", "fiebre", "FYEH-breh", "Tengo fiebre desde ayer."),
        ("healthy", "sano", "SAH-noh", "Comer fruta es sano."),
        ("pharmacy", "farmacia", "far-MAH-syah", "La farmacia cierra tarde."),
        ("tired", "cansado", "kahn-SAH-doh", "Estoy muy cansado hoy."),
        ("heart", "corazón", "koh-rah-SOHN", "El corazón late rápido."),
        ("to rest", "descansar", "dehs-kahn-SAR", "Necesitas descansar."),
        ("eye", "ojo", "OH-hoh", "Me duele el ojo derecho."),
        ("ear", "oreja", "oh-REH-hah", "Tiene una oreja roja."),
        ("nose", "nariz", "nah-REES", "Tengo la nariz tapada."),
        ("mouth", "boca", "BOH-kah", "Abre la boca, por favor."),
        ("arm", "brazo", "BRAH-soh", "Me rompí el brazo."),
        ("leg", "pierna", "PYEHR-nah", "Me duele la pierna."),
        ("foot", "pie", "pyeh", "Voy a pie al trabajo."),
        ("back", "espalda", "ehs-PAHL-dah", "Tengo dolor de espalda."),
        ("stomach", "estómago", "ehs-TOH-mah-goh", "Me duele el estómago."),
        ("throat", "garganta", "gar-GAHN-tah", "Tengo la garganta irritada."),
        ("blood", "sangre", "SAHN-greh", "Hoy me sacan sangre."),
        ("pain", "dolor", "doh-LOR", "El dolor es fuerte."),
        ("cough", "tos", "tohs", "Tengo tos desde el lunes."),
        ("a cold", "resfriado", "rrehs-free-AH-doh", "Tengo un resfriado."),
        ("hospital", "hospital", "ohs-pee-TAHL", "El hospital está cerca."),
        ("appointment", "cita", "SEE-tah", "Tengo cita con el médico."),
        ("pill", "pastilla", "pahs-TEE-yah", "Toma una pastilla cada ocho horas."),
        ("prescription", "receta", "rreh-SEH-tah", "Necesitas una receta."),
        ("wound", "herida", "eh-REE-dah", "La herida está limpia."),
        ("to hurt", "doler", "doh-LEHR", "Me va a doler mañana."),
        ("ill", "enfermo", "ehn-FEHR-moh", "Hoy estoy enfermo."),
        ("ambulance", "ambulancia", "ahm-boo-LAHN-syah", "Llama a una ambulancia."),
        ("allergy", "alergia", "ah-LEHR-hyah", "Tengo alergia al polen."),
        ("to breathe", "respirar", "rrehs-pee-RAR", "Intenta respirar despacio."),
        ("skin", "piel", "pyehl", "Usa crema para la piel."),
        ("bone", "hueso", "WEH-soh", "Se rompió un hueso."),
        ("finger", "dedo", "DEH-doh", "Me corté el dedo."),
        ("knee", "rodilla", "rroh-DEE-yah", "Me duele la rodilla."),
        ("shoulder", "hombro", "OHM-broh", "Tengo el hombro cansado."),
        ("exercise", "ejercicio", "eh-hehr-SEE-syoh", "Hago ejercicio cada día."),
        ("diet", "dieta", "DYEH-tah", "Sigo una dieta sana."),
        ("weight", "peso", "PEH-soh", "Controlo mi peso."),
    ],
    &[
        ("house", "casa", "KAH-sah", "Mi casa tiene jardín."),
        ("kitchen", "cocina", "koh-SEE-nah", "La cocina es pequeña."),
        ("bedroom", "dormitorio", "dor-mee-TOH-ryoh", "El dormitorio tiene dos camas."),
        ("window", "ventana", "vehn-TAH-nah", "Abre la ventana, por favor."),
        ("door", "puerta", "PWEHR-tah", "Cierra la puerta."),
        ("rent", "alquiler", "ahl-kee-LEHR", "El alquiler es alto."),
        ("neighbour", "vecino", "veh-SEE-noh", "Mi vecino tiene un perro."),
        ("table", "mesa", "MEH-sah", "La mesa es de madera."),
        ("chair", "silla", "SEE-yah", "Hay cuatro sillas."),
        ("key", "llave", "YAH-veh", "No encuentro la llave."),
        ("living room", "salón", "sah-LOHN", "Vemos la tele en el salón."),
        ("bathroom", "baño", "BAH-nyoh", "El baño está arriba."),
        ("garage", "garaje", "gah-RAH-heh", "El coche está en el garaje."),
        ("roof", "tejado", "teh-HAH-doh", "Hay un gato en el tejado."),
        ("flat", "piso", "PEE-soh", "Vivo en un piso pequeño."),
        ("wall", "pared", "pah-REHD", "La pared es blanca."),
        ("stairs", "escalera", "ehs-kah-LEH-rah", "Sube por la escalera."),
        ("bed", "cama", "KAH-mah", "La cama es muy cómoda."),
        ("sofa", "sofá", "soh-FAH", "El sofá es nuevo."),
        ("lamp", "lámpara", "LAHM-pah-rah", "Enciende la lámpara."),
        ("fridge", "nevera", "neh-VEH-rah", "La leche está en la nevera."),
        ("oven", "horno", "OR-noh", "El pan está en el horno."),
        ("shower", "ducha", "DOO-chah", "La ducha no tiene agua caliente."),
        ("mirror", "espejo", "ehs-PEH-hoh", "Hay un espejo en el pasillo."),
        ("rug", "alfombra", "ahl-FOHM-brah", "La alfombra es roja."),
        ("wardrobe", "armario", "ar-MAH-ryoh", "La ropa está en el armario."),
        ("shelf", "estante", "ehs-TAHN-teh", "Los libros están en el estante."),
        ("balcony", "balcón", "bahl-KOHN", "Desayuno en el balcón."),
        ("lift", "ascensor", "ah-sehn-SOR", "El ascensor no funciona."),
        ("apartment", "apartamento", "ah-par-tah-MEHN-toh", "El apartamento tiene dos baños."),
        ("to move house", "mudarse", "moo-DAR-seh", "Es difícil mudarse con niños."),
        ("landlord", "casero", "kah-SEH-roh", "El casero es muy amable."),
        ("furniture", "muebles", "MWEH-blehs", "Los muebles son antiguos."),
        ("to clean", "limpiar", "leem-PYAR", "Hoy toca limpiar la casa."),
        ("to tidy", "ordenar", "or-deh-NAR", "Tienes que ordenar tu cuarto."),
        ("rubbish", "basura", "bah-SOO-rah", "Saca la basura, por favor."),
        ("washing machine", "lavadora", "lah-vah-DOH-rah", "La lavadora hace ruido."),
        ("curtain", "cortina", "kor-TEE-nah", "Cierra la cortina."),
        ("sink", "fregadero", "freh-gah-DEH-roh", "Los platos están en el fregadero."),
        ("light", "luz", "loos", "Apaga la luz."),
        ("heating", "calefacción", "kah-leh-fahk-SYOHN", "Pon la calefacción."),
        ("neighbourhood", "barrio", "BAH-rryoh", "Mi barrio es tranquilo."),
    ],
    &[
        ("rain", "lluvia", "YOO-vyah", "La lluvia es fuerte hoy."),
        ("sun", "sol", "sohl", "Hace sol en la playa."),
        ("wind", "viento", "VYEHN-toh", "Hay mucho viento."),
        ("snow", "nieve", "NYEH-veh", "La nieve cubre la montaña."),
        ("cloud", "nube", "NOO-beh", "Una nube tapa el sol."),
        ("tree", "árbol", "AR-bohl", "El árbol es muy alto."),
        ("river", "río", "RREE-oh", "El río pasa por el pueblo."),
        ("mountain", "montaña", "mohn-TAH-nyah", "Subimos la montaña."),
        ("hot", "calor", "kah-LOR", "Hace calor en verano."),
        ("cold", "frío", "FREE-oh", "En invierno hace frío."),
        ("storm", "tormenta", "tor-MEHN-tah", "Viene una tormenta."),
        ("fog", "niebla", "NYEH-blah", "Hay niebla en la carretera."),
        ("temperature", "temperatura", "tehm-peh-rah-TOO-rah", "La temperatura baja por la noche."),
        ("sky", "cielo", "SYEH-loh", "El cielo está despejado."),
        ("moon", "luna", "LOO-nah", "Hoy hay luna llena."),
        ("star", "estrella", "ehs-TREH-yah", "Veo una estrella brillante."),
        ("sea", "mar", "mar", "El mar está tranquilo."),
        ("lake", "lago", "LAH-goh", "Nadamos en el lago."),
        ("forest", "bosque", "BOHS-keh", "Paseamos por el bosque."),
        ("flower", "flor", "flor", "Esta flor huele bien."),
        ("grass", "hierba", "YEHR-bah", "La hierba está mojada."),
        ("leaf", "hoja", "OH-hah", "Cae una hoja del árbol."),
        ("stone", "piedra", "PYEH-drah", "La casa es de piedra."),
        ("island", "isla", "EES-lah", "La isla es pequeña."),
        ("desert", "desierto", "deh-SYEHR-toh", "El desierto es muy seco."),
        ("countryside", "campo", "KAHM-poh", "Vivimos en el campo."),
        ("spring", "primavera", "pree-mah-VEH-rah", "En primavera hay flores."),
        ("summer", "verano", "veh-RAH-noh", "En verano vamos a la playa."),
        ("autumn", "otoño", "oh-TOH-nyoh", "En otoño caen las hojas."),
        ("winter", "invierno", "een-VYEHR-noh", "El invierno es largo aquí."),
        ("rainbow", "arco iris", "AR-koh EE-rees", "Después de la lluvia sale un arco iris."),
        ("lightning", "relámpago", "rreh-LAHM-pah-goh", "Vi un relámpago en el cielo."),
        ("thunder", "trueno", "TRWEH-noh", "El trueno asusta al perro."),
        ("ice", "hielo", "YEH-loh", "Hay hielo en la calle."),
        ("wet", "mojado", "moh-HAH-doh", "El suelo está mojado."),
        ("dry", "seco", "SEH-koh", "El aire es muy seco."),
        ("warm", "cálido", "KAH-lee-doh", "El clima es cálido."),
        ("animal", "animal", "ah-nee-MAHL", "El animal duerme en la cueva."),
        ("bird", "pájaro", "PAH-hah-roh", "Un pájaro canta en la ventana."),
        ("dog", "perro", "PEH-rroh", "El perro corre en el parque."),
        ("cat", "gato", "GAH-toh", "El gato duerme al sol."),
        ("forecast", "pronóstico", "proh-NOHS-tee-koh", "El pronóstico dice lluvia."),
    ],
    &[
        ("to read", "leer", "leh-EHR", "Me gusta leer novelas."),
        ("to swim", "nadar", "nah-DAR", "Vamos a nadar el sábado."),
        ("to sing", "cantar", "kahn-TAR", "Me encanta cantar en la ducha."),
        ("music", "música", "MOO-see-kah", "Escucho música en el tren."),
        ("game", "juego", "HWEH-goh", "Este juego es divertido."),
        ("film", "película", "peh-LEE-koo-lah", "Vimos una película de terror."),
        ("to paint", "pintar", "peen-TAR", "Mi hermana sabe pintar."),
        ("garden", "jardín", "har-DEEN", "Trabajo en el jardín."),
        ("weekend", "fin de semana", "feen deh seh-MAH-nah", "El fin de semana descanso."),
        ("to dance", "bailar", "bai-LAR", "Nos gusta bailar salsa."),
        ("to play", "jugar", "hoo-GAR", "Vamos a jugar al tenis."),
        ("football", "fútbol", "FOOT-bohl", "Veo el fútbol los domingos."),
        ("ball", "pelota", "peh-LOH-tah", "Pásame la pelota."),
        ("guitar", "guitarra", "gee-TAH-rrah", "Toco la guitarra."),
        ("piano", "piano", "PYAH-noh", "Mi hija toca el piano."),
        ("book", "libro", "LEE-broh", "Este libro es muy bueno."),
        ("novel", "novela", "noh-VEH-lah", "Leo una novela policiaca."),
        ("photo", "foto", "FOH-toh", "Mira esta foto del viaje."),
        ("camera", "cámara", "KAH-mah-rah", "Mi cámara es antigua."),
        ("cinema", "cine", "SEE-neh", "Vamos al cine esta noche."),
        ("theatre", "teatro", "teh-AH-troh", "El teatro está lleno."),
        ("concert", "concierto", "kohn-SYEHR-toh", "El concierto empieza a las nueve."),
        ("to run", "correr", "koh-RREHR", "Me gusta correr por la mañana."),
        ("hiking", "senderismo", "sehn-deh-REES-moh", "Hacemos senderismo en la sierra."),
        ("bicycle", "bicicleta", "bee-see-KLEH-tah", "Voy en bicicleta al trabajo."),
        ("chess", "ajedrez", "ah-heh-DREHS", "Juego al ajedrez con mi abuelo."),
        ("to draw", "dibujar", "dee-boo-HAR", "A mi hijo le gusta dibujar."),
        ("to knit", "tejer", "teh-HEHR", "Mi abuela sabe tejer."),
        ("collection", "colección", "koh-lehk-SYOHN", "Tengo una colección de sellos."),
        ("video game", "videojuego", "vee-deh-oh-HWEH-goh", "Este videojuego es nuevo."),
        ("series", "serie", "SEH-ryeh", "Veo una serie española."),
        ("song", "canción", "kahn-SYOHN", "Esta canción es preciosa."),
        ("to fish", "pescar", "pehs-KAR", "Vamos a pescar al lago."),
        ("gym", "gimnasio", "heem-NAH-syoh", "Voy al gimnasio tres días."),
        ("yoga", "yoga", "YOH-gah", "Hago yoga por la mañana."),
        ("free time", "tiempo libre", "TYEHM-poh LEE-breh", "En mi tiempo libre leo."),
        ("club", "club", "kloob", "Soy socio de un club de lectura."),
        ("match", "partido", "par-TEE-doh", "El partido termina empatado."),
        ("fan", "aficionado", "ah-fee-syoh-NAH-doh", "Soy aficionado al jazz."),
        ("hobby", "afición", "ah-fee-SYOHN", "Mi afición es la fotografía."),
        ("to relax", "relajarse", "rreh-lah-HAR-seh", "Es importante relajarse."),
        ("to photograph", "fotografiar", "foh-toh-grah-FYAR", "Me gusta fotografiar pájaros."),
    ],
    &[
        ("party", "fiesta", "FYEHS-tah", "La fiesta empieza a las nueve."),
        ("birthday", "cumpleaños", "koom-pleh-AH-nyohs", "Hoy es mi cumpleaños."),
        ("gift", "regalo", "rreh-GAH-loh", "Gracias por el regalo."),
        ("tradition", "tradición", "trah-dee-SYOHN", "Es una tradición antigua."),
        ("holiday", "día festivo", "DEE-ah fehs-TEE-voh", "Mañana es día festivo."),
        ("wedding", "boda", "BOH-dah", "La boda fue preciosa."),
        ("candle", "vela", "VEH-lah", "Enciende una vela."),
        ("to celebrate", "celebrar", "seh-leh-BRAR", "Vamos a celebrar juntos."),
        ("dance", "baile", "BAI-leh", "El baile típico es alegre."),
        ("guest", "invitado", "een-vee-TAH-doh", "Cada invitado trae comida."),
        ("Christmas", "Navidad", "nah-vee-DAHD", "En Navidad cenamos en familia."),
        ("New Year", "Año Nuevo", "AH-nyoh NWEH-voh", "Celebramos el Año Nuevo en la plaza."),
        ("Holy Week", "Semana Santa", "seh-MAH-nah SAHN-tah", "En Semana Santa hay procesiones."),
        ("carnival", "carnaval", "kar-nah-VAHL", "El carnaval de Cádiz es famoso."),
        ("fireworks", "fuegos artificiales", "FWEH-gohs ar-tee-fee-SYAH-lehs", "Vemos los fuegos artificiales."),
        ("parade", "desfile", "dehs-FEE-leh", "El desfile pasa por aquí."),
        ("costume", "disfraz", "dees-FRAHS", "Mi disfraz es de pirata."),
        ("mask", "máscara", "MAHS-kah-rah", "Lleva una máscara dorada."),
        ("cake", "pastel", "pahs-TEHL", "El pastel tiene velas."),
        ("toast", "brindis", "BREEN-dees", "Hacemos un brindis por los novios."),
        ("to invite", "invitar", "een-vee-TAR", "Quiero invitar a mis amigos."),
        ("invitation", "invitación", "een-vee-tah-SYOHN", "Recibí una invitación a la boda."),
        ("festival", "festival", "fehs-tee-VAHL", "El festival dura tres días."),
        ("custom", "costumbre", "kohs-TOOM-breh", "Es una costumbre muy antigua."),
        ("church", "iglesia", "ee-GLEH-syah", "La iglesia está en la plaza."),
        ("saint", "santo", "SAHN-toh", "Hoy es el día de mi santo."),
        ("flag", "bandera", "bahn-DEH-rah", "La bandera tiene tres colores."),
        ("anthem", "himno", "EEM-noh", "Todos cantan el himno."),
        ("folklore", "folclore", "fohl-KLOH-reh", "El folclore de la región es rico."),
        ("art", "arte", "AR-teh", "Me interesa el arte moderno."),
        ("painting", "cuadro", "KWAH-droh", "Este cuadro es de Goya."),
        ("exhibition", "exposición", "ehks-poh-see-SYOHN", "La exposición abre mañana."),
        ("history", "historia", "ees-TOH-ryah", "La historia del pueblo es larga."),
        ("heritage", "patrimonio", "pah-tree-MOH-nyoh", "La catedral es patrimonio mundial."),
        ("to congratulate", "felicitar", "feh-lee-see-TAR", "Te llamo para felicitar a tu hija."),
        ("congratulations", "felicidades", "feh-lee-see-DAH-dehs", "¡Felicidades por tu cumpleaños!"),
        ("card", "tarjeta", "tar-HEH-tah", "Te escribo una tarjeta."),
        ("decoration", "decoración", "deh-koh-rah-SYOHN", "La decoración es preciosa."),
        ("lantern", "farol", "fah-ROHL", "Cuelga un farol en la puerta."),
        ("religion", "religión", "rreh-lee-HYOHN", "La religión influye en las fiestas."),
        ("anniversary", "aniversario", "ah-nee-vehr-SAH-ryoh", "Hoy es nuestro aniversario."),
        ("crowd", "multitud", "mool-tee-TOOD", "Una multitud llena la calle."),
    ],
];

/// Up to `count` curated words the learner does not know yet.
/// The week's own pool comes first, then the following weeks' pools. The
/// pools hold 42 words per week, so a learner who never got a generated
/// word still receives the full quota every day.
pub fn fallback_words(
    week: u32,
    count: u32,
    known: &[VocabularyItem],
    learned_at: DateTime<Utc>,
) -> Vec<VocabularyItem> {
    let start = (week.clamp(1, 12) - 1) as usize;
    let pools = (0..WEEK_WORDS.len()).map(|i| WEEK_WORDS[(start + i) % WEEK_WORDS.len()]);

    let mut picked: Vec<VocabularyItem> = Vec::with_capacity(count as usize);
    for (source, target, pron, example) in pools.flat_map(|pool| pool.iter()) {
        if picked.len() >= count as usize {
            break;
        }
        let item = VocabularyItem::new(week, source, target, pron, example, learned_at);
        if known.iter().chain(picked.iter()).any(|k| k.same_word(&item)) {
            continue;
        }
        picked.push(item);
    }
    picked
}

pub fn fallback_story(theme: &str, words: &[String], recap: bool) -> Story {
    let title = if recap {
        format!("Week recap: {}", theme)
    } else {
        format!("A short story: {}", theme)
    };
    let word_list = if words.is_empty() {
        "the words you learned this week".to_string()
    } else {
        words.join(", ")
    };
    Story {
        title,
        text: format!(
            "Today's story could not be written, so here is a reading task instead. \
             Read each of these words out loud and say one sentence with it about \"{}\": {}. \
             Then link two of them in one longer sentence.",
            theme, word_list
        ),
    }
}

pub fn fallback_practice_prompt(focus: FocusCategory, theme: &str) -> String {
    match focus {
        FocusCategory::Practice => format!(
            "Write five sentences about \"{}\" using at least five words from this week. \
             Keep them simple and check the spelling of each word.",
            theme
        ),
        FocusCategory::Application => format!(
            "Imagine a real situation connected to \"{}\". Write a short dialogue of four to six \
             lines between you and another person using this week's words.",
            theme
        ),
        _ => format!(
            "Write a short paragraph about what you learned this week on \"{}\". \
             Use as many new words as you can and underline the ones you find hardest.",
            theme
        ),
    }
}
